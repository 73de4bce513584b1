use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{Phase, Winner};
use crate::hand::Category;
use crate::player::{PlayerAction, Seat};

/// Records a single action taken during a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: Seat,
    /// Phase in which the action happened
    pub phase: Phase,
    pub action: PlayerAction,
}

/// What happened so far in the current round. Lives inside the game state and
/// is cleared by `new_round`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundLog {
    #[serde(default)]
    pub ante: u32,
    #[serde(default)]
    pub actions: Vec<ActionRecord>,
    /// Positions exchanged by the human and the opponent
    #[serde(default)]
    pub discards: [Vec<usize>; 2],
    /// Pot paid out when the round ended
    #[serde(default)]
    pub settled_pot: u32,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

/// Hand categories revealed at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Human's category first
    pub categories: [Category; 2],
    #[serde(default)]
    pub notes: Option<String>,
}

/// One finished round, serialized as a line of JSONL.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Format: YYYYMMDD-NNNNNN
    pub round_id: String,
    /// RFC3339, filled in by the logger when missing
    #[serde(default)]
    pub ts: Option<String>,
    pub players: [String; 2],
    pub hands: [Vec<Card>; 2],
    pub ante: u32,
    pub actions: Vec<ActionRecord>,
    pub discards: [Vec<usize>; 2],
    pub pot: u32,
    pub winner: Winner,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends finished rounds to a JSONL history file.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    /// Truncates `path` and starts a new history.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        ensure_parent(path.as_ref());
        let f = File::create(path)?;
        Ok(Self::with_writer(f))
    }

    /// Keeps existing lines and appends after them.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        ensure_parent(path.as_ref());
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::with_writer(f))
    }

    /// Logger that only hands out ids, for callers without a file.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    fn with_writer(f: File) -> Self {
        Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        tracing::debug!(round_id = %rec.round_id, "round recorded");
        Ok(())
    }
}

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = create_dir_all(parent);
        }
    }
}
