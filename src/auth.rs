use anyhow::Result;
use argon2_phc::Error;
use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

pub const PASSWORD_ENV: &str = "ARGON2_PHC_PASSWORD";

/// Resolves the password from, in order: the command line, the
/// `ARGON2_PHC_PASSWORD` environment variable, piped stdin, or an
/// interactive prompt.
pub fn read_password(arg: Option<String>, confirm: bool) -> Result<Zeroizing<String>> {
    if let Some(pw) = arg {
        return Ok(Zeroizing::new(pw));
    }

    //  ARGON2_PHC_PASSWORD="supersecret" argon2-phc hash
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    //  echo "supersecret" | argon2-phc hash
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut buf)?;
        trim_newline(&mut buf);

        if !buf.is_empty() {
            return Ok(buf);
        }
        return Err(Error::MissingPassword.into());
    }

    let pw = Zeroizing::new(rpassword::prompt_password("Password: ")?);
    if pw.is_empty() {
        return Err(Error::MissingPassword.into());
    }

    if confirm {
        let again = Zeroizing::new(rpassword::prompt_password("Confirm password: ")?);
        if *pw != *again {
            anyhow::bail!("passwords do not match");
        }
    }

    Ok(pw)
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
