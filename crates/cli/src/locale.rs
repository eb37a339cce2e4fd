#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLocale {
    #[default]
    EnUs,
    FrFr,
}

impl UiLocale {
    pub fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::FrFr => "fr_FR",
        }
    }

    pub fn from_opt(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::EnUs;
        };
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        if normalized == "fr" || normalized.starts_with("fr_") {
            Self::FrFr
        } else {
            Self::EnUs
        }
    }

    pub fn text<'a>(self, en: &'a str, fr: &'a str) -> &'a str {
        if matches!(self, Self::FrFr) {
            fr
        } else {
            en
        }
    }
}
