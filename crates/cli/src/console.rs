use crate::locale::UiLocale;
use flip7_core::{Choice, InputError, Player, PlayerInput};
use std::io::{BufRead, Write};

/// Line-based prompts on a shared terminal. Invalid answers are re-asked, never reported.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    locale: UiLocale,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W, locale: UiLocale) -> Self {
        Self {
            reader,
            writer,
            locale,
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError("end of input".to_string()));
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, line: &str) -> Result<(), InputError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    /// Asks for the player count, then each name. Blank names become `P1`, `P2`, ...
    pub fn ask_players(&mut self, min: usize) -> Result<Vec<String>, InputError> {
        let locale = self.locale;
        let prompt = format!(
            "{} (>={min}) ? ",
            locale.text("Number of players", "Nombre de joueurs")
        );
        let count = loop {
            let answer = self.read_line(&prompt)?;
            if answer.is_empty() {
                break min;
            }
            match answer.parse::<usize>() {
                Ok(count) if count >= min => break count,
                _ => self.say(locale.text("Invalid choice.", "Choix invalide."))?,
            }
        };

        let mut names: Vec<String> = Vec::with_capacity(count);
        for seat in 1..=count {
            let prompt = format!("{} {seat} ? ", locale.text("Player name", "Nom joueur"));
            loop {
                let answer = self.read_line(&prompt)?;
                let name = if answer.is_empty() {
                    format!("P{seat}")
                } else {
                    answer
                };
                if names.contains(&name) {
                    self.say(locale.text("Name already taken.", "Nom déjà pris."))?;
                    continue;
                }
                names.push(name);
                break;
            }
        }
        Ok(names)
    }
}

impl<R: BufRead, W: Write> PlayerInput for ConsoleInput<R, W> {
    fn hit_or_stay(&mut self, player: &Player, potential: i64) -> Result<Choice, InputError> {
        let locale = self.locale;
        let numbers: Vec<String> = player.numbers.iter().map(u8::to_string).collect();
        let modifiers: Vec<String> = player.modifiers.iter().map(|m| m.to_string()).collect();
        self.say("\n---")?;
        self.say(&format!("{} {}", locale.text("Turn of", "Tour de"), player.name))?;
        self.say(&format!(
            "{}: [{}] | Mods: [{}] | Second chance: {}",
            locale.text("Numbers", "Cartes nombres"),
            numbers.join(", "),
            modifiers.join(", "),
            if player.extra_life {
                locale.text("yes", "oui")
            } else {
                locale.text("no", "non")
            }
        ))?;
        self.say(&format!(
            "{}: {potential}",
            locale.text(
                "Score if you stay now",
                "Score potentiel si tu restes maintenant"
            )
        ))?;
        let prompt = locale.text(
            "Choice: (h) hit / (s) stay ? ",
            "Choix: (h) recevoir une nouvelle carte / (s) rester ? ",
        );
        loop {
            match self.read_line(prompt)?.to_ascii_lowercase().as_str() {
                "h" => return Ok(Choice::Hit),
                "s" => return Ok(Choice::Stay),
                _ => {}
            }
        }
    }

    fn choose_player(
        &mut self,
        giver: &Player,
        candidates: &[&Player],
    ) -> Result<Option<usize>, InputError> {
        let locale = self.locale;
        self.say(&format!(
            "{} {} {}",
            locale.text("Extra SECOND_CHANCE:", "SECOND_CHANCE supplémentaire:"),
            giver.name,
            locale.text(
                "must give it to another active player",
                "doit la donner à un autre joueur actif"
            )
        ))?;
        for (pos, player) in candidates.iter().enumerate() {
            self.say(&format!("  {}) {}", pos + 1, player.name))?;
        }
        let prompt = locale.text("Choice (number): ", "Choix (num) : ");
        loop {
            match self.read_line(prompt)?.parse::<usize>() {
                Ok(pick) if (1..=candidates.len()).contains(&pick) => return Ok(Some(pick - 1)),
                _ => self.say(locale.text("Invalid choice.", "Choix invalide."))?,
            }
        }
    }
}
