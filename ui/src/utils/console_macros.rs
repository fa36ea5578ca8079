/// Macros for properly formatted console logging
/// On wasm32 these wrap gloo_console and prefix each line with `js_sys::Date::now()`.
/// Everywhere else (host-side unit tests) they forward to `tracing`, since the
/// js imports panic outside a browser.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_emit {
    ($console:ident, $tracing:ident, $msg:expr) => {{
        let message: String = $msg;
        #[cfg(target_arch = "wasm32")]
        gloo_console::$console!(format!("[{}] {}", js_sys::Date::now(), message));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::$tracing!("{}", message);
    }};
}

#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::__console_emit!(info, info, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(info, info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_log {
    ($fmt:expr) => {
        $crate::__console_emit!(log, info, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(log, info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::__console_emit!(warn, warn, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(warn, warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::__console_emit!(error, error, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(error, error, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::__console_emit!(debug, debug, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(debug, debug, format!($fmt, $($arg)*))
    };
}
