use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod utils;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = match Args::try_parse_from(location_hash.split(['#', '&'])) {
        Ok(args) => {
            if let Some(log_level) = args.verbose.log_level() {
                if let Err(err) = console_log::init_with_level(log_level) {
                    gloo::console::error!(format!("Error initializing logger: {}", err));
                }
            }
            args
        }
        Err(err) => {
            let _ = console_log::init_with_level(log::Level::Warn);
            log::warn!("ignoring location hash arguments: {}", err);
            Args::default()
        }
    };
    log::debug!("args: {:?}", args);

    let Some(root): Option<web_sys::Element> = document().get_element_by_id("game") else {
        log::error!("Could not find id=\"game\" element");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
