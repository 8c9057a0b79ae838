use dialoguer::Password;

use crate::app::AppContext;
use crate::cli::{DecryptArgs, EncryptArgs};
use crate::errors::CliError;
use crate::helpers::{read_text, TextSource};

pub fn handle_encrypt(ctx: &AppContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let plaintext = match read_text(args.text.as_deref())? {
        TextSource::Argument(text) | TextSource::Stdin(text) => text,
        TextSource::Terminal => prompt_plaintext()?,
    };

    let sealed = ctx
        .cipher()
        .encrypt_data(&plaintext, &args.user)
        .map_err(CliError::from)?;
    println!("{}", sealed);
    Ok(())
}

pub fn handle_decrypt(ctx: &AppContext, args: &DecryptArgs) -> anyhow::Result<()> {
    let ciphertext = read_text(args.ciphertext.as_deref())?.require("ciphertext")?;
    let ciphertext = ciphertext.trim();

    let plaintext = if args.strict {
        ctx.cipher()
            .try_decrypt(ciphertext, &args.user)
            .map_err(CliError::from)?
    } else {
        ctx.cipher().decrypt_data(ciphertext, &args.user)
    };
    println!("{}", plaintext);
    Ok(())
}

fn prompt_plaintext() -> anyhow::Result<String> {
    Password::new()
        .with_prompt("Value to encrypt")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read value: {}", e))
}
