//! Grid Line Generator - overlay line geometry and stagger timing.
//!
//! Produces `rows + 1` horizontal and `columns + 1` vertical lines, each
//! positioned at a percentage of the grid and carrying a two-stage timing
//! (draw, then fade). Pure: the same inputs always yield equal output.
//!
//! # Timing
//!
//! Horizontal line *i* starts at `horizontal_base + i * step`. Verticals start
//! at `v_base`, where
//!
//! ```text
//! v_base = max(vertical_base, horizontal_base + (rows + 1) * step)
//! ```
//!
//! so every vertical begins strictly after the last horizontal, however many
//! rows there are. With the defaults and two rows that is exactly 0.5s.

use crate::error::{GridError, Result};
use crate::types::Orientation;

// =============================================================================
// Stagger Configuration
// =============================================================================

/// How vertical lines are timed relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaggerScheme {
    /// Each vertical draws and fades at `v_base + j * step`.
    #[default]
    Sequential,
    /// All verticals draw together at `v_base`; fades cascade at
    /// `v_base + j * step`.
    SimultaneousDraw,
}

/// Tunable timing constants for the border overlay, in seconds.
///
/// Fields are private: every value comes from [`Default`] or the validated
/// [`StaggerConfig::new`], so the horizontal-before-vertical ordering holds
/// for any config a caller can build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerConfig {
    scheme: StaggerScheme,
    /// Start of the first horizontal line.
    horizontal_base: f32,
    /// Earliest start of the first vertical line.
    vertical_base: f32,
    /// Delay added per line index.
    step: f32,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            scheme: StaggerScheme::Sequential,
            horizontal_base: 0.2,
            vertical_base: 0.5,
            step: 0.1,
        }
    }
}

impl StaggerConfig {
    /// Validated timing. Bases must be finite and non-negative, step strictly
    /// positive.
    pub fn new(horizontal_base: f32, vertical_base: f32, step: f32) -> Result<Self> {
        let config = Self {
            horizontal_base,
            vertical_base,
            step,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_scheme(mut self, scheme: StaggerScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn scheme(&self) -> StaggerScheme {
        self.scheme
    }

    pub fn horizontal_base(&self) -> f32 {
        self.horizontal_base
    }

    pub fn vertical_base(&self) -> f32 {
        self.vertical_base
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn validate(&self) -> Result<()> {
        let finite = self.horizontal_base.is_finite()
            && self.vertical_base.is_finite()
            && self.step.is_finite();
        if !finite {
            return Err(GridError::InvalidStagger("timing values must be finite"));
        }
        if self.horizontal_base < 0.0 || self.vertical_base < 0.0 {
            return Err(GridError::InvalidStagger("base delays must be non-negative"));
        }
        if self.step <= 0.0 {
            return Err(GridError::InvalidStagger("step must be positive"));
        }
        Ok(())
    }

    /// Start of the first vertical line for a grid with `rows` rows.
    pub fn vertical_start(&self, rows: u16) -> f32 {
        let after_horizontals = self.horizontal_base + (rows as f32 + 1.0) * self.step;
        self.vertical_base.max(after_horizontals)
    }
}

// =============================================================================
// Grid Lines
// =============================================================================

/// One overlay line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub orientation: Orientation,
    /// Position along the perpendicular axis (0 = first edge).
    pub index: u16,
    /// Offset from the top (horizontal) or left (vertical) edge, 0..=100.
    pub offset_percent: f32,
    /// Seconds before the line starts growing to full length.
    pub draw_delay: f32,
    /// Seconds before the line's opacity transition starts.
    pub fade_delay: f32,
}

impl GridLine {
    /// Stable key such as `h-0` or `v-3`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.orientation.key_prefix(), self.index)
    }
}

/// Full line set for one grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLines {
    pub horizontal: Vec<GridLine>,
    pub vertical: Vec<GridLine>,
}

impl GridLines {
    /// Horizontal lines first, then vertical.
    pub fn iter(&self) -> impl Iterator<Item = &GridLine> {
        self.horizontal.iter().chain(self.vertical.iter())
    }

    pub fn len(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute the overlay lines for a `rows × columns` grid.
///
/// Zero tracks are treated as one; a validated [`GridSpec`](crate::GridSpec)
/// never has them.
pub fn generate_grid_lines(rows: u16, columns: u16, config: &StaggerConfig) -> GridLines {
    let rows = rows.max(1);
    let columns = columns.max(1);

    let horizontal = (0..=rows)
        .map(|i| {
            let delay = config.horizontal_base + i as f32 * config.step;
            GridLine {
                orientation: Orientation::Horizontal,
                index: i,
                offset_percent: i as f32 / rows as f32 * 100.0,
                draw_delay: delay,
                fade_delay: delay,
            }
        })
        .collect();

    let v_base = config.vertical_start(rows);
    let vertical = (0..=columns)
        .map(|j| {
            let staggered = v_base + j as f32 * config.step;
            let draw_delay = match config.scheme {
                StaggerScheme::Sequential => staggered,
                StaggerScheme::SimultaneousDraw => v_base,
            };
            GridLine {
                orientation: Orientation::Vertical,
                index: j,
                offset_percent: j as f32 / columns as f32 * 100.0,
                draw_delay,
                fade_delay: staggered,
            }
        })
        .collect();

    GridLines { horizontal, vertical }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(lines: &[GridLine]) -> Vec<f32> {
        lines.iter().map(|l| l.offset_percent).collect()
    }

    fn schemes() -> [StaggerConfig; 2] {
        [
            StaggerConfig::default(),
            StaggerConfig::default().with_scheme(StaggerScheme::SimultaneousDraw),
        ]
    }

    #[test]
    fn test_line_counts() {
        for rows in 1..=8 {
            for columns in 1..=8 {
                let lines = generate_grid_lines(rows, columns, &StaggerConfig::default());
                assert_eq!(lines.horizontal.len(), rows as usize + 1);
                assert_eq!(lines.vertical.len(), columns as usize + 1);
                assert_eq!(lines.len(), rows as usize + columns as usize + 2);
            }
        }
    }

    #[test]
    fn test_edges_always_present() {
        for n in 1..=12 {
            let lines = generate_grid_lines(n, n + 1, &StaggerConfig::default());
            for set in [&lines.horizontal, &lines.vertical] {
                assert_eq!(set.first().unwrap().offset_percent, 0.0);
                assert!((set.last().unwrap().offset_percent - 100.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_two_rows_offsets() {
        let lines = generate_grid_lines(2, 3, &StaggerConfig::default());
        assert_eq!(offsets(&lines.horizontal), vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_offsets_strictly_increasing() {
        let lines = generate_grid_lines(7, 5, &StaggerConfig::default());
        for set in [&lines.horizontal, &lines.vertical] {
            for pair in set.windows(2) {
                assert!(pair[0].offset_percent < pair[1].offset_percent);
            }
        }
    }

    #[test]
    fn test_horizontals_begin_before_verticals() {
        for config in schemes() {
            for rows in 1..=20 {
                for columns in 1..=6 {
                    let lines = generate_grid_lines(rows, columns, &config);
                    let last_h = lines
                        .horizontal
                        .iter()
                        .map(|l| l.draw_delay.max(l.fade_delay))
                        .fold(f32::MIN, f32::max);
                    let first_v = lines
                        .vertical
                        .iter()
                        .map(|l| l.draw_delay.min(l.fade_delay))
                        .fold(f32::MAX, f32::min);
                    assert!(last_h < first_v, "rows={rows} columns={columns}");
                }
            }
        }
    }

    #[test]
    fn test_delays_monotonic_within_orientation() {
        for config in schemes() {
            let lines = generate_grid_lines(4, 6, &config);
            for set in [&lines.horizontal, &lines.vertical] {
                for pair in set.windows(2) {
                    assert!(pair[0].draw_delay <= pair[1].draw_delay);
                    assert!(pair[0].fade_delay <= pair[1].fade_delay);
                }
            }
        }
    }

    #[test]
    fn test_default_timing_matches_two_row_reveal() {
        let lines = generate_grid_lines(2, 3, &StaggerConfig::default());
        let h: Vec<f32> = lines.horizontal.iter().map(|l| l.draw_delay).collect();
        let v: Vec<f32> = lines.vertical.iter().map(|l| l.draw_delay).collect();
        let expect_h = [0.2, 0.3, 0.4];
        let expect_v = [0.5, 0.6, 0.7, 0.8];
        for (got, want) in h.iter().zip(expect_h) {
            assert!((got - want).abs() < 1e-5);
        }
        for (got, want) in v.iter().zip(expect_v) {
            assert!((got - want).abs() < 1e-5);
        }
    }

    #[test]
    fn test_simultaneous_draw_shares_start() {
        let config = StaggerConfig::default().with_scheme(StaggerScheme::SimultaneousDraw);
        let lines = generate_grid_lines(2, 3, &config);
        let first = lines.vertical[0].draw_delay;
        assert!(lines.vertical.iter().all(|l| l.draw_delay == first));
        assert!(lines.vertical[3].fade_delay > lines.vertical[0].fade_delay);
    }

    #[test]
    fn test_tall_grid_pushes_vertical_start() {
        let config = StaggerConfig::default();
        // 0.2 + 6 * 0.1 = 0.8 > 0.5
        assert!((config.vertical_start(5) - 0.8).abs() < 1e-5);
        assert!((config.vertical_start(2) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_deterministic() {
        let config = StaggerConfig::default();
        assert_eq!(
            generate_grid_lines(3, 4, &config),
            generate_grid_lines(3, 4, &config)
        );
    }

    #[test]
    fn test_line_keys() {
        let lines = generate_grid_lines(1, 2, &StaggerConfig::default());
        let keys: Vec<String> = lines.iter().map(GridLine::key).collect();
        assert_eq!(keys, vec!["h-0", "h-1", "v-0", "v-1", "v-2"]);
    }

    #[test]
    fn test_stagger_validation() {
        assert!(StaggerConfig::new(0.2, 0.5, 0.1).is_ok());
        assert!(StaggerConfig::new(-0.1, 0.5, 0.1).is_err());
        assert!(StaggerConfig::new(0.2, 0.5, 0.0).is_err());
        assert!(StaggerConfig::new(0.2, f32::INFINITY, 0.1).is_err());
    }
}
