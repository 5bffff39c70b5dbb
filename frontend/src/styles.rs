pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 bg-gray-50 dark:bg-gray-900";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] hover:shadow-xl dark:hover:shadow-[0_6px_16px_-6px_rgba(255,255,255,0.06)] transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const INPUT_ERROR: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-inset focus:ring-red-500 sm:text-sm";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";
pub const LINK: &str = "text-blue-600 dark:text-blue-400 hover:text-blue-700 dark:hover:text-blue-300 transition-colors duration-200";

// Wheel
pub const WHEEL_STAGE: &str = "relative flex items-center justify-center";
pub const SPIN_BUTTON_IDLE: &str = "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0";
pub const SPIN_BUTTON_DISABLED: &str = "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white";
pub const RESULT_BADGE: &str = "flex items-center justify-center gap-3 px-6 py-4 rounded-xl bg-gradient-to-r from-yellow-400 to-orange-500 border-2 border-yellow-300 text-white font-bold text-xl shadow-lg animate-bounce";
pub const COLOR_SWATCH: &str = "inline-block w-4 h-4 rounded-full border border-white";
pub const COLOR_PICKER: &str = "h-9 w-9 rounded cursor-pointer";
