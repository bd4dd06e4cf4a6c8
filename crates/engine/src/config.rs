//! Process configuration, read once before a session starts.

use std::path::PathBuf;

use crate::adapter::FetchConfig;
use crate::term::{BoardView, CellOverrides, DisplayMode, GlyphSet, Palette};
use crate::types::Orientation;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Pinned cell dimensions; unset axes are derived every frame.
    pub overrides: CellOverrides,
    pub display: DisplayMode,
    pub orientation: Orientation,
    /// Replay a loaded record only this far.
    pub record_ply: Option<usize>,
    pub fetch: FetchConfig,
    pub log_path: Option<PathBuf>,
}

impl Config {
    /// Read `TESS_*` variables. Anything unset or unparsable keeps its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let overrides = CellOverrides::new(
            get("TESS_CELL_WIDTH").and_then(|s| s.parse().ok()),
            get("TESS_CELL_HEIGHT").and_then(|s| s.parse().ok()),
        );
        let display = get("TESS_DISPLAY")
            .and_then(|s| DisplayMode::from_str(&s))
            .unwrap_or_default();
        let orientation = get("TESS_ORIENTATION")
            .and_then(|s| Orientation::from_str(&s))
            .unwrap_or_default();

        Self {
            overrides,
            display,
            orientation,
            record_ply: get("TESS_RECORD_PLY").and_then(|s| s.parse().ok()),
            fetch: FetchConfig::from_lookup(&lookup),
            log_path: get("TESS_LOG_PATH").map(PathBuf::from),
        }
    }

    /// Board painter for this configuration.
    pub fn board_view(&self) -> BoardView {
        BoardView::new(GlyphSet::new(self.display), Palette::default())
            .with_overrides(self.overrides)
            .with_orientation(self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.display, DisplayMode::Big);
        assert_eq!(config.orientation, Orientation::White);
        assert_eq!(config.overrides, CellOverrides::default());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            ("TESS_CELL_WIDTH", "5"),
            ("TESS_CELL_HEIGHT", " 2 "),
            ("TESS_DISPLAY", "simple"),
            ("TESS_ORIENTATION", "Black"),
            ("TESS_RECORD_PLY", "12"),
            ("TESS_PUZZLE_URL", "http://127.0.0.1:1/next"),
            ("TESS_LOG_PATH", "/tmp/tess.log"),
        ]));
        assert_eq!(config.overrides, CellOverrides::new(Some(5), Some(2)));
        assert_eq!(config.display, DisplayMode::Simple);
        assert_eq!(config.orientation, Orientation::Black);
        assert_eq!(config.record_ply, Some(12));
        assert_eq!(config.fetch.url, "http://127.0.0.1:1/next");
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/tess.log")));
    }

    #[test]
    fn test_garbage_falls_back() {
        let config = Config::from_lookup(lookup(&[
            ("TESS_CELL_WIDTH", "wide"),
            ("TESS_DISPLAY", "huge"),
            ("TESS_ORIENTATION", "sideways"),
            ("TESS_RECORD_PLY", "-1"),
        ]));
        assert_eq!(config.overrides.width, None);
        assert_eq!(config.display, DisplayMode::Big);
        assert_eq!(config.orientation, Orientation::White);
        assert_eq!(config.record_ply, None);
    }
}
