use std::env;

mod arguments;
mod canvas;
mod editor;
mod input;
mod session;
mod storage;
mod terminal;

use arguments::ArgsConfig;
use session::Session;
use terminal::TermionTerminal;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let config = ArgsConfig::new(&args).unwrap_or_else(|err| {
        eprintln!("Problem parsing arguments: {}", err);
        std::process::exit(1);
    });

    let term = TermionTerminal::new().unwrap_or_else(|err| {
        eprintln!("Problem setting up the terminal: {}", err);
        std::process::exit(1);
    });

    let mut session = Session::new(term, config.save_dir);

    if let Some(name) = config.file_name {
        if let Err(err) = session.load_startup(&name) {
            eprintln!("Problem loading '{}': {}", name, err);
            std::process::exit(1);
        }
    }

    session.run().unwrap_or_else(|err| {
        eprintln!("Problem while running the editor: {}", err);
        std::process::exit(1);
    });
}
