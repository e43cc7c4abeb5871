pub const PAGE: &str = "App bg-red-800 w-svw h-svh overflow-hidden flex flex-col items-center relative";
pub const TITLE: &str = "pt-36 flex justify-center mb-16";
pub const TITLE_TEXT: &str = "text-white text-7xl font-bold";
pub const PRIZE_DISPLAY: &str = "text-white text-2xl font-bold text-center my-8 min-h-[2rem]";
pub const PRIZE_DISPLAY_NOTICE: &str = "text-yellow-300 text-2xl font-bold text-center my-8 min-h-[2rem]";
pub const REMAINING: &str = "my-4 text-center text-white";
pub const REMAINING_BREAKDOWN: &str = "mt-2 flex flex-wrap justify-center gap-2 text-sm text-white/80";
pub const REMAINING_CHIP: &str = "px-2 py-1 rounded-full bg-white/10";
pub const LOADING: &str = "my-4 text-center text-white/70 animate-pulse";

pub const BUTTON_DRAW: &str = "inline-flex items-center justify-center px-10 py-3 rounded-lg text-xl font-bold text-red-800 bg-yellow-300 hover:bg-yellow-200 shadow-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_STOP: &str = "inline-flex items-center justify-center px-10 py-3 rounded-lg text-xl font-bold text-white bg-red-600 hover:bg-red-500 border-2 border-yellow-300 shadow-lg transition-all duration-300 animate-pulse";
pub const BUTTON_PANEL: &str = "inline-flex items-center justify-center px-3 py-1 rounded-lg text-sm font-medium border border-white/40 text-white hover:bg-white/10 transition-colors duration-200 disabled:opacity-40 disabled:cursor-not-allowed";
pub const HISTORY_TOGGLE: &str = "absolute right-2 bottom-2";

pub const DRAWER_OVERLAY: &str = "fixed w-full h-full left-0 top-0 bg-black/50";
pub const DRAWER: &str = "fixed bottom-0 right-0 w-1/4 h-full bg-red-800 text-white transition-transform transform";
pub const DRAWER_ACTIONS: &str = "flex justify-end gap-2 p-4";
pub const DRAWER_TITLE: &str = "px-4 text-xl font-bold";
pub const DRAWER_LIST: &str = "p-4 overflow-y-auto";
pub const DRAWER_ITEM: &str = "mb-2";
pub const DRAWER_EMPTY: &str = "px-4 py-2 text-white/60";
