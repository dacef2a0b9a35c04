// crates/engine/src/watch.rs
use crate::config::Config;
use crate::error::Result;
use notify::{RecursiveMode, Watcher};
use std::sync::mpsc::channel;

/// Run `on_event` once, then again after every burst of file-system changes.
///
/// Events arriving within `config.debounce` of each other collapse into one
/// re-run. Returns when the watcher's event channel closes.
///
/// # Errors
/// Returns `Watch` if the watcher cannot be created or a root cannot be watched.
pub fn watch_loop<F>(config: &Config, mut on_event: F) -> Result<()>
where
    F: FnMut(),
{
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| match res {
        Ok(event) => {
            let _ = tx.send(event);
        }
        Err(e) => log::warn!("watch error: {e}"),
    })?;

    for root in &config.walk.roots {
        if root.exists() {
            watcher.watch(root, RecursiveMode::Recursive)?;
        }
    }

    log::info!("watching {} path(s)", config.walk.roots.len());
    on_event();

    let debounce = config.debounce;

    while rx.recv().is_ok() {
        std::thread::sleep(debounce);
        // 待機中に溜まったイベントを捨てる
        let dropped = rx.try_iter().count();
        log::debug!("change detected ({} coalesced events)", dropped + 1);
        on_event();
    }

    Ok(())
}
