use jaztool::cli::{Cli, USAGE};
use jaztool::session::Session;
use jaztool::{commands, logger, JazError};
use tracing::{debug, info};

fn main() {
    let args = match Cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", USAGE);
            std::process::exit(e.exit_code());
        }
    };

    // Initialize logging system
    if let Err(e) = logger::init(args.verbose) {
        eprintln!("jaztool: {}", e);
    }

    debug!("jaztool starting: {} {}", args.device, args.command);

    let mut session = Session::new(args.device.clone(), !args.no_eject);

    match commands::execute(&args, &mut session) {
        Ok(()) => {
            info!("Operation completed successfully");
        }
        Err(e) => {
            report_failure(&session, &e);
            std::process::exit(e.exit_code());
        }
    }
}

fn report_failure(session: &Session, e: &JazError) {
    debug!("Operation failed: {:?}", e);
    println!("{}", session.diagnostic(e));
}
