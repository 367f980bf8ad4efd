//! UI Components
//!
//! Leptos components that make up the birthday card.

mod button;
mod card_shell;
mod candle_row;
mod balloon_row;
mod confetti_overlay;
mod birthday_card;

pub use button::Button;
pub use card_shell::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use candle_row::CandleRow;
pub use balloon_row::BalloonRow;
pub use confetti_overlay::Confetti;
pub use birthday_card::BirthdayCard;
