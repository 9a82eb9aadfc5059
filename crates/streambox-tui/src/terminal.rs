//! Terminal lifecycle helpers

/// Chain a panic hook that puts the terminal back into its normal state
/// before the default hook prints the panic. Without this a panic leaves
/// the shell in raw mode with the alternate screen active.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        default_hook(info);
    }));
}
