//! ContactForge - contact form validation and simulated submission
//!
//! Reads a contact form as JSON from stdin, prints the validation report as
//! JSON to stdout and, when every field is valid, runs the simulated
//! submission and prints its outcome.

use serde_json::json;
use tokio::io::AsyncReadExt;

use contactforge::{
    config::Config, logging, ContactForm, ContactFormData, Field, SimulatedTransport,
};

#[tokio::main]
async fn main() -> contactforge::Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    // Validate configuration
    config.validate()?;

    // Initialize logging/tracing
    logging::init_tracing(&config.logging)?;

    config.log_config();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting ContactForge");

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    let data: ContactFormData = serde_json::from_str(&input)?;

    let mut form = ContactForm::from_config(&config.submission);
    for field in Field::ALL {
        form.set_value(field, data.value(field));
    }

    let validation = form.validate();
    let report = json!({
        "all_valid": validation.all_valid,
        "first_invalid": validation.first_invalid(),
        "fields": {
            "name": validation.result(Field::Name),
            "email": validation.result(Field::Email),
            "subject": validation.result(Field::Subject),
            "message": validation.result(Field::Message),
        },
        "character_count": form.character_count().to_string(),
        "remaining_characters": form.character_count().remaining(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !validation.all_valid {
        let error: contactforge::Error = validation.errors().into();
        tracing::warn!(
            error_type = error.error_type(),
            user_correctable = error.is_user_correctable(),
            "Contact form has invalid fields"
        );
        return Err(error);
    }

    let transport = SimulatedTransport::from_config(&config.submission);
    let outcome = form.submit(&transport).await;

    let result = match &outcome {
        Ok(receipt) => serde_json::to_value(receipt)?,
        Err(error) => {
            let app_error = contactforge::Error::from(error.clone());
            json!({
                "success": false,
                "message": error.to_string(),
                "error_type": app_error.error_type(),
                "retryable": app_error.is_retryable(),
            })
        },
    };
    println!("{}", serde_json::to_string_pretty(&result)?);

    outcome?;
    tracing::info!("ContactForge finished");
    Ok(())
}
