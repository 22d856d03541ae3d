//! Festive Presentation Helpers
//!
//! Text and confetti generation used by the page components.

pub const PAGE_TITLE: &str = "🎄 My Christmas Todo List 🎄";
pub const EMPTY_LIST_GREETING: &str = "Ho ho ho! Time to start your Christmas preparations! 🎁";

pub const CONFETTI_COUNT: usize = 30;
pub const CONFETTI_COLORS: [&str; 4] = ["#ff0000", "#00ff00", "#ffd700", "#ff69b4"];

/// Status line above the list
pub fn task_count_message(count: usize) -> String {
    match count {
        0 => "No tasks yet — let's get ready for Christmas! ❄️".to_string(),
        1 => "You have 1 task to complete".to_string(),
        n => format!("You have {} tasks to complete", n),
    }
}

pub fn footer_line(year: u32) -> String {
    format!("Made with ❤️ and holiday magic · {}", year)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub color: &'static str,
    /// Horizontal start, in vw
    pub left_vw: f64,
    pub fall_secs: f64,
    pub delay_secs: f64,
}

impl ConfettiPiece {
    pub fn style(&self) -> String {
        format!(
            "background: {}; left: {:.2}vw; animation: confettiFall {:.2}s linear forwards; animation-delay: {:.2}s;",
            self.color, self.left_vw, self.fall_secs, self.delay_secs
        )
    }
}

/// Generate confetti from a source of uniform values in `[0, 1)`
pub fn confetti_pieces(count: usize, mut random: impl FnMut() -> f64) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| {
            let color_index = ((random() * CONFETTI_COLORS.len() as f64) as usize).min(CONFETTI_COLORS.len() - 1);
            ConfettiPiece {
                color: CONFETTI_COLORS[color_index],
                left_vw: random() * 100.0,
                fall_secs: 2.0 + random() * 2.0,
                delay_secs: random() * 0.5,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_count_message() {
        assert_eq!(task_count_message(0), "No tasks yet — let's get ready for Christmas! ❄️");
        assert_eq!(task_count_message(1), "You have 1 task to complete");
        assert_eq!(task_count_message(2), "You have 2 tasks to complete");
        assert_eq!(task_count_message(12), "You have 12 tasks to complete");
    }

    #[test]
    fn test_footer_line() {
        assert_eq!(footer_line(2025), "Made with ❤️ and holiday magic · 2025");
    }

    #[test]
    fn test_confetti_ranges() {
        // Cycle through edge-ish values
        let samples = [0.0, 0.25, 0.5, 0.75, 0.999];
        let mut i = 0;
        let pieces = confetti_pieces(CONFETTI_COUNT, || {
            let v = samples[i % samples.len()];
            i += 1;
            v
        });

        assert_eq!(pieces.len(), CONFETTI_COUNT);
        for piece in &pieces {
            assert!(CONFETTI_COLORS.contains(&piece.color));
            assert!((0.0..100.0).contains(&piece.left_vw));
            assert!((2.0..4.0).contains(&piece.fall_secs));
            assert!((0.0..0.5).contains(&piece.delay_secs));
        }
    }

    #[test]
    fn test_confetti_piece_draws_in_order() {
        let mut values = vec![0.5, 0.1, 0.5, 0.2].into_iter();
        let pieces = confetti_pieces(1, || values.next().unwrap());
        assert_eq!(
            pieces,
            vec![ConfettiPiece {
                color: "#ffd700",
                left_vw: 10.0,
                fall_secs: 3.0,
                delay_secs: 0.1,
            }]
        );
        assert_eq!(
            pieces[0].style(),
            "background: #ffd700; left: 10.00vw; animation: confettiFall 3.00s linear forwards; animation-delay: 0.10s;"
        );
    }
}
