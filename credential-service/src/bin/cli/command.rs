use anyhow::bail;

pub const USAGE: &str = "usage: credential-service <register|login> <email>   (password read from stdin)\n       credential-service verify <token>";

/// One invocation of the command-line entry point.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Register { email: String },
    Login { email: String },
    Verify { token: String },
}

impl Command {
    pub fn parse<I>(args: I) -> Result<Self, anyhow::Error>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        match args.as_slice() {
            [command, email] if command == "register" => Ok(Command::Register {
                email: email.clone(),
            }),
            [command, email] if command == "login" => Ok(Command::Login {
                email: email.clone(),
            }),
            [command, token] if command == "verify" => Ok(Command::Verify {
                token: token.clone(),
            }),
            _ => bail!(USAGE),
        }
    }
}
