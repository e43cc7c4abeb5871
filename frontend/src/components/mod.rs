pub mod lottery_result;
pub mod spin_button;

pub use lottery_result::LotteryResult;
pub use spin_button::SpinButton;
