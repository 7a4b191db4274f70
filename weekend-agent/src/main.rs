use std::{env, process};

use log::error;
use weekend_agent::present::{self, Phrasing};
use weekend_agent::{cli, Agent, HttpFetcher};

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "weekend_agent=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    setup_logging();

    let args = cli::parse(&env::args().skip(1).collect::<Vec<_>>());

    let fetcher = match HttpFetcher::new(args.timeout) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    };

    let phrasing = Phrasing::for_start_url(&args.start_url);
    let agent = Agent::new(fetcher, args.config);

    present::banner();

    match agent.run(&args.start_url).await {
        Ok(plan) => present::print_recommendations(&plan.recommendations, phrasing),
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}
