use crate::locale::UiLocale;
use flip7_core::{Choice, Event, EventSink, SinkError};
use std::io::Write;

/// Prints the game as it happens.
pub struct Narrator<W: Write> {
    writer: W,
    locale: UiLocale,
}

impl<W: Write> Narrator<W> {
    pub fn new(writer: W, locale: UiLocale) -> Self {
        Self { writer, locale }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

pub fn describe(locale: UiLocale, event: &Event) -> Option<String> {
    let text = match event {
        Event::GameStart { players, .. } => format!(
            "{}: {}",
            locale.text("Players", "Joueurs"),
            players.join(", ")
        ),
        Event::RoundStart { round, dealer } => format!(
            "\n====================\n{} {round} | {}: {dealer}\n====================",
            locale.text("Round", "Tour"),
            locale.text("Dealer", "Donneur"),
        ),
        Event::Draw { player, card, .. } => {
            format!("→ {player} {}: {card}", locale.text("draws", "pioche"))
        }
        Event::ActionFreeze { receiver } => format!(
            "💥 {receiver} {}",
            locale.text(
                "is FROZEN: out of the round, round score = 0",
                "est FREEZE : éliminé du tour, score du tour = 0"
            )
        ),
        Event::ActionSecondChanceTaken { player } => format!(
            "🧡 {player} {}",
            locale.text(
                "gains a SECOND_CHANCE (usable against a duplicate).",
                "gagne une SECOND_CHANCE (utilisable contre un doublon)."
            )
        ),
        Event::ActionSecondChanceGiven { from, to } => format!(
            "🧡 {from} {} {to}.",
            locale.text("gives SECOND_CHANCE to", "donne SECOND_CHANCE à")
        ),
        Event::ActionSecondChanceDiscarded { .. } => format!(
            "🧡 {}",
            locale.text(
                "SECOND_CHANCE discarded (nobody can receive it).",
                "SECOND_CHANCE défaussée (personne ne peut la recevoir)."
            )
        ),
        Event::ActionFlipThree { receiver } => format!(
            "🟨 {receiver} {}",
            locale.text(
                "takes FLIP_THREE: must draw 3 cards.",
                "subit FLIP_THREE : il doit piocher 3 cartes."
            )
        ),
        Event::BustDuplicate { player, duplicate } => match locale {
            UiLocale::EnUs => {
                format!("💥 Duplicate {duplicate}: {player} is out of the round (0 points).")
            }
            UiLocale::FrFr => {
                format!("💥 Doublon {duplicate} : {player} est éliminé du tour (0 point ce tour).")
            }
        },
        Event::SecondChanceUsed { duplicate, .. } => match locale {
            UiLocale::EnUs => {
                format!("✅ Duplicate {duplicate} cancelled by SECOND_CHANCE (card discarded).")
            }
            UiLocale::FrFr => format!(
                "✅ Doublon {duplicate} annulé grâce à SECOND_CHANCE (carte doublon défaussée)."
            ),
        },
        Event::Flip7 { player } => format!(
            "🎉 FLIP7! {player} {}",
            locale.text(
                "completes the row: the round stops now.",
                "complète sa ligne : le tour s'arrête immédiatement."
            )
        ),
        Event::Choice {
            player,
            choice: Choice::Stay,
        } => format!(
            "{player} {}",
            locale.text(
                "stays (banks the round score).",
                "reste (il sécurise son score du tour)."
            )
        ),
        Event::Choice { .. } => return None,
        Event::RoundEnd { .. } => {
            format!("\n=== {} ===", locale.text("End of round", "Fin du tour"))
        }
        Event::RoundScore {
            player,
            gained,
            total,
        } => match locale {
            UiLocale::EnUs => format!("{player} gains {gained} points (total = {total})"),
            UiLocale::FrFr => format!("{player} gagne {gained} points (total = {total})"),
        },
        Event::GameEnd { winners, .. } => format!(
            "\n=== {} ===\n{}: {} ({})",
            locale.text("GAME OVER", "FIN DE PARTIE"),
            locale.text("Winner(s)", "Vainqueur(s)"),
            winners.join(", "),
            locale.text("best final score", "meilleur score final"),
        ),
    };
    Some(text)
}

impl<W: Write> EventSink for Narrator<W> {
    fn emit(&mut self, event: &Event) -> Result<(), SinkError> {
        if let Some(line) = describe(self.locale, event) {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }
}
