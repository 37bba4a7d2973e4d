use std::io::{self, Write};

use super::{GameRecord, Summary};

/// Write each game's result followed by the batch summary. In JSON mode
/// every game is one object per line and the summary is the last line.
pub fn write_report<W: Write>(
    out: &mut W,
    records: &[GameRecord],
    summary: &Summary,
    json: bool,
) -> io::Result<()> {
    for record in records {
        if json {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "Game {}: {}", record.score.game_id, record.score)?;
        }
    }
    if json {
        serde_json::to_writer(&mut *out, summary)?;
        writeln!(out)
    } else {
        writeln!(out, "{summary}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FinalScore, GameId};

    fn records() -> Vec<GameRecord> {
        vec![
            GameRecord::new(
                FinalScore {
                    game_id: GameId(0),
                    home: 3,
                    away: 1,
                },
                70,
            ),
            GameRecord::new(
                FinalScore {
                    game_id: GameId(1),
                    home: 2,
                    away: 5,
                },
                81,
            ),
        ]
    }

    #[test]
    fn test_json_report_ends_with_summary() {
        let records = records();
        let summary = Summary::from_records(&records);
        let mut out = Vec::new();
        write_report(&mut out, &records, &summary, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["game_id"], 0);
        assert_eq!(lines[0]["outcome"], "home_win");
        assert_eq!(lines[1]["outcome"], "away_win");
        assert_eq!(lines[2]["games"], 2);
        assert_eq!(lines[2]["away_wins"], 1);
    }

    #[test]
    fn test_text_report() {
        let records = records();
        let summary = Summary::from_records(&records);
        let mut out = Vec::new();
        write_report(&mut out, &records, &summary, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Game 0: Home score is 3. Away score is 1.\nHome team won\n"));
        assert!(text.contains("Game 1: Home score is 2. Away score is 5.\nAway team won\n"));
        assert!(text.trim_end().ends_with(&summary.to_string()));
    }
}
