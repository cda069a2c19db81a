use crate::utils::storage as storage_utils;

/// Blocking browser alert; logs instead when no window exists.
pub fn alert(message: &str) {
    match storage_utils::window() {
        Ok(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert failed: {}", message);
            }
        }
        Err(_) => log::warn!("alert: {}", message),
    }
}

/// Opens `url` in a new tab without handing it `window.opener`.
pub fn open_external(url: &str) {
    if url.trim().is_empty() {
        return;
    }
    if let Ok(window) = storage_utils::window() {
        if window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .is_err()
        {
            log::warn!("failed to open {}", url);
        }
    }
}

/// Hands the page over to the user's mail client.
pub fn open_mail_client(href: &str) {
    match storage_utils::window() {
        Ok(window) => {
            if window.location().set_href(href).is_err() {
                log::warn!("failed to open mail client");
            }
        }
        Err(err) => log::warn!("cannot open mail client: {}", err),
    }
}

pub fn failure_message(action: &str, detail: &str) -> String {
    format!("Failed to {}: {}", action, detail)
}

#[cfg(test)]
mod tests {
    use super::failure_message;

    #[test]
    fn failure_message_names_the_action() {
        assert_eq!(
            failure_message("save news", "Error updating news: bad id"),
            "Failed to save news: Error updating news: bad id"
        );
    }
}
