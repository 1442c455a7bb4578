#[cfg(feature = "tracing")]
macro_rules! mltrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "multilist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! mltrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! mldebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "multilist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! mldebug {
    ($($tt:tt)*) => {};
}
