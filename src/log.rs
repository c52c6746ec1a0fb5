/// Writes a formatted line to the browser console.
///
/// Off wasm32 the arguments are still type-checked but nothing is printed,
/// so native tests never touch the JS imports.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::log::write(::std::format_args!($($arg)*))
    };
}

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn write(args: std::fmt::Arguments<'_>) {
    web_sys::console::log_1(&args.to_string().into());
}

#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub fn write(_args: std::fmt::Arguments<'_>) {}
