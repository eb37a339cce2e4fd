use chrono::{Local, Utc};
use flip7_core::{Event, EventSink, SinkError};
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct Record<'a> {
    #[serde(flatten)]
    event: &'a Event,
    timestamp: i64,
}

/// Append-only JSON-lines event log, one object per event.
pub struct JsonlLog<W: Write> {
    writer: W,
}

impl JsonlLog<BufWriter<File>> {
    /// Opens `game-YYYYMMDD-HHMMSS.log` under `dir`, creating the directory if needed.
    pub fn create_in(dir: &Path) -> std::io::Result<(PathBuf, Self)> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("game-{}.log", Local::now().format("%Y%m%d-%H%M%S")));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((path, Self::new(BufWriter::new(file))))
    }
}

impl<W: Write> JsonlLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for JsonlLog<W> {
    fn emit(&mut self, event: &Event) -> Result<(), SinkError> {
        let record = Record {
            event,
            timestamp: Utc::now().timestamp_millis(),
        };
        let line = serde_json::to_string(&record).map_err(|err| SinkError(err.to_string()))?;
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Forwards every event to both sinks, left first.
pub struct Tee<A, B> {
    left: A,
    right: B,
}

impl<A: EventSink, B: EventSink> Tee<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: EventSink, B: EventSink> EventSink for Tee<A, B> {
    fn emit(&mut self, event: &Event) -> Result<(), SinkError> {
        self.left.emit(event)?;
        self.right.emit(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flip7_core::{Card, DrawPhase, EventBus};
    use serde_json::Value;

    #[test]
    fn each_event_is_one_json_line_with_timestamp() {
        let mut log = JsonlLog::new(Vec::new());
        log.emit(&Event::RoundStart {
            round: 3,
            dealer: "Ada".to_string(),
        })
        .unwrap();
        log.emit(&Event::Draw {
            player: "Bo".to_string(),
            card: Card::Number(7),
            phase: DrawPhase::Hit,
            forced_by: None,
        })
        .unwrap();

        let body = String::from_utf8(log.into_inner()).unwrap();
        let lines: Vec<Value> = body
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "ROUND_START");
        assert_eq!(lines[0]["round"], 3);
        assert!(lines[0]["timestamp"].as_i64().unwrap() > 0);
        assert_eq!(lines[1]["type"], "DRAW");
        assert_eq!(lines[1]["player"], "Bo");
        assert_eq!(lines[1]["card"], "#7");
        assert!(lines[1].get("forced_by").is_none());
    }

    #[test]
    fn tee_feeds_both_sinks() {
        let mut tee = Tee::new(EventBus::default(), EventBus::default());
        tee.emit(&Event::Flip7 {
            player: "Ada".to_string(),
        })
        .unwrap();
        assert_eq!(tee.left.events().len(), 1);
        assert_eq!(tee.right.events().len(), 1);
    }

    #[test]
    fn log_file_lands_in_requested_directory() {
        let dir = std::env::temp_dir().join(format!("flip7-log-{}", std::process::id()));
        let (path, mut log) = JsonlLog::create_in(&dir).unwrap();
        log.emit(&Event::GameStart {
            players: vec!["Ada".to_string(), "Bo".to_string()],
            seed: 1,
        })
        .unwrap();
        let body = fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("{\"type\":\"GAME_START\""));
        assert!(path.starts_with(&dir));
        let _ = fs::remove_dir_all(&dir);
    }
}
