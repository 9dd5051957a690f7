// Widgets and state for the full-screen browser
mod app;
mod form;
mod input;
mod results;
mod theme;
mod ui;

use anyhow::Result;

use crate::store::Store;
use app::InteractiveApp;

/// Open the table browser on the given store and block until the user
/// quits
pub fn run_interactive(store: Store) -> Result<()> {
    let mut app = InteractiveApp::new(store);
    app.run()
}
