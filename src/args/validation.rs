use reqwest::Url;

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url
pub fn check_http_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("'{value}' is not a valid url: {e}"))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(value.to_string()),
        _ => Err(format!("'{value}' must be an absolute http or https url.")),
    }
}

/// # Errors
///
/// Will return `Err` if the keyword is blank
pub fn check_keyword(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("The site keyword must not be blank.".to_string());
    }
    Ok(())
}
