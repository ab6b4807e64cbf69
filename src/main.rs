mod cli;
mod engine;
mod gallows;
mod game_state;
mod logging;
mod songbank;

use cli::{ConsoleInterface, parse_cli};
use game_state::game_loop;
use songbank::{EMBEDDED_SONGBANK, load_songbank_from_str, validate};
use std::io;

fn main() {
    logging::init();
    let _cli = parse_cli();

    let songs = load_songbank_from_str(EMBEDDED_SONGBANK);
    if let Err(e) = validate(&songs) {
        eprintln!("Bad songbank: {e}");
        std::process::exit(1);
    }
    log::info!("songbank loaded: {} titles", songs.len());

    let stdin = io::stdin();
    let mut interface = ConsoleInterface::new(stdin.lock());
    let mut rng = rand::thread_rng();
    game_loop(&songs, &mut interface, &mut rng);
}
