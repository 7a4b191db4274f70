use std::process;
use std::time::Duration;

use getopts::Options;

use crate::{Config, Credentials};

pub struct Args {
    pub start_url: String,
    pub timeout: Duration,
    pub config: Config,
}

pub enum Parsed {
    Help(String),
    Run(Args),
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "u",
        "username",
        "Username for the restaurant login [Default: zeke]",
        "USERNAME",
    );
    opts.optopt(
        "p",
        "password",
        "Password for the restaurant login [Default: coys]",
        "PASSWORD",
    );
    opts.optopt(
        "l",
        "login-url",
        "Restaurant login URL [Default: <restaurant link>/login]",
        "URL",
    );
    opts.optopt(
        "t",
        "timeout",
        "Timeout for each request [Default: 30]",
        "SECONDS",
    );
    opts
}

fn usage(opts: &Options) -> String {
    opts.usage(&format!(
        "Usage: {} [options] START_URL",
        env!("CARGO_PKG_NAME")
    ))
}

pub fn try_parse(args: &[String]) -> Result<Parsed, String> {
    let opts = opts();
    let matches = opts.parse(args).map_err(|fail| fail.to_string())?;

    if matches.opt_present("help") {
        return Ok(Parsed::Help(usage(&opts)));
    }

    let start_url = match matches.free.as_slice() {
        [start_url] => start_url.clone(),
        [] => return Err("Missing START_URL".to_string()),
        _ => return Err("Expected a single START_URL".to_string()),
    };

    let timeout = matches
        .opt_get_default("timeout", 30)
        .map(Duration::from_secs)
        .map_err(|err| format!("Provided value for option 'timeout' is invalid: {err}"))?;

    let credentials = Credentials {
        username: matches.opt_str("username").unwrap_or_else(|| "zeke".to_string()),
        password: matches.opt_str("password").unwrap_or_else(|| "coys".to_string()),
    };

    Ok(Parsed::Run(Args {
        start_url,
        timeout,
        config: Config {
            credentials,
            login_url: matches.opt_str("login-url"),
        },
    }))
}

pub fn parse(args: &[String]) -> Args {
    match try_parse(args) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help(usage)) => {
            println!("{usage}");
            process::exit(0);
        }
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{}", usage(&opts()));
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let Ok(Parsed::Run(parsed)) = try_parse(&args(&["http://localhost:8080"])) else {
            panic!("expected a runnable configuration");
        };

        assert_eq!(parsed.start_url, "http://localhost:8080");
        assert_eq!(parsed.timeout, Duration::from_secs(30));
        assert_eq!(parsed.config.credentials.username, "zeke");
        assert_eq!(parsed.config.credentials.password, "coys");
        assert_eq!(parsed.config.login_url, None);
    }

    #[test]
    fn overrides() {
        let Ok(Parsed::Run(parsed)) = try_parse(&args(&[
            "-u",
            "ada",
            "--password",
            "secret",
            "--login-url",
            "http://localhost:8080/dinner/login",
            "-t",
            "5",
            "http://localhost:8080",
        ])) else {
            panic!("expected a runnable configuration");
        };

        assert_eq!(parsed.timeout, Duration::from_secs(5));
        assert_eq!(parsed.config.credentials.username, "ada");
        assert_eq!(parsed.config.credentials.password, "secret");
        assert_eq!(
            parsed.config.login_url.as_deref(),
            Some("http://localhost:8080/dinner/login")
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(try_parse(&args(&[])).is_err());
        assert!(try_parse(&args(&["a", "b"])).is_err());
        assert!(try_parse(&args(&["-t", "soon", "http://localhost"])).is_err());
        assert!(matches!(try_parse(&args(&["-h"])), Ok(Parsed::Help(_))));
    }
}
