#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {:?}", $msg, why);
            }
        }
    };
}

// Thin wrappers so call sites don't need the log crate in scope and all of our
// output can be filtered by the crate target

#[macro_export]
macro_rules! penumbra_error {
    ($($arg:tt)+) => {
        $crate::__log::error!(target: "penumbra", $($arg)+)
    };
}

#[macro_export]
macro_rules! penumbra_warn {
    ($($arg:tt)+) => {
        $crate::__log::warn!(target: "penumbra", $($arg)+)
    };
}

#[macro_export]
macro_rules! penumbra_info {
    ($($arg:tt)+) => {
        $crate::__log::info!(target: "penumbra", $($arg)+)
    };
}

#[macro_export]
macro_rules! penumbra_debug {
    ($($arg:tt)+) => {
        $crate::__log::debug!(target: "penumbra", $($arg)+)
    };
}

#[macro_export]
macro_rules! penumbra_trace {
    ($($arg:tt)+) => {
        $crate::__log::trace!(target: "penumbra", $($arg)+)
    };
}
