//! Plugin entry points called by the host.

use crate::{MiguProvider, PROVIDER_ID, PROVIDER_NAME, PROVIDER_SYMBOL};
use fuo_core::{App, LibraryError};
use std::sync::Arc;
use tracing::info;

/// Register the provider and, in GUI mode, its side-panel item.
pub fn enable(app: &mut App, provider: Arc<MiguProvider>) -> Result<(), LibraryError> {
    app.library.register(provider)?;
    if app.is_gui() {
        let item = app
            .pvd_uimgr
            .create_item(PROVIDER_ID, PROVIDER_NAME, PROVIDER_SYMBOL, PROVIDER_NAME);
        app.pvd_uimgr.add_item(item);
    }
    info!(provider = PROVIDER_ID, mode = ?app.mode, "plugin enabled");
    Ok(())
}

pub fn disable(app: &mut App) -> Result<(), LibraryError> {
    app.library.deregister(PROVIDER_ID)?;
    if app.is_gui() {
        app.pvd_uimgr.remove(PROVIDER_ID);
    }
    info!(provider = PROVIDER_ID, "plugin disabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{client, FakeTransport};
    use fuo_core::AppMode;

    fn provider() -> Arc<MiguProvider> {
        Arc::new(MiguProvider::with_client(Arc::new(client(
            &FakeTransport::new(),
        ))))
    }

    #[test]
    fn gui_mode_adds_and_removes_menu_item() {
        let mut app = App::new(AppMode::Gui);
        enable(&mut app, provider()).unwrap();

        assert!(app.library.get(PROVIDER_ID).is_some());
        let item = app.pvd_uimgr.get(PROVIDER_ID).unwrap();
        assert_eq!(item.text, "咪咕音乐");
        assert_eq!(item.symbol, "🎵️ ");

        disable(&mut app).unwrap();
        assert!(app.library.get(PROVIDER_ID).is_none());
        assert!(app.pvd_uimgr.get(PROVIDER_ID).is_none());
    }

    #[test]
    fn cli_mode_skips_menu_item() {
        let mut app = App::new(AppMode::Cli);
        enable(&mut app, provider()).unwrap();
        assert!(app.library.get(PROVIDER_ID).is_some());
        assert!(app.pvd_uimgr.get(PROVIDER_ID).is_none());
    }

    #[test]
    fn double_enable_and_disable_are_errors() {
        let mut app = App::new(AppMode::Cli);
        enable(&mut app, provider()).unwrap();
        assert_eq!(
            enable(&mut app, provider()),
            Err(LibraryError::AlreadyRegistered("migu".into()))
        );
        disable(&mut app).unwrap();
        assert_eq!(
            disable(&mut app),
            Err(LibraryError::UnknownProvider("migu".into()))
        );
    }
}
