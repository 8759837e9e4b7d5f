use crate::utils::error::{Result, ServiceError};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// The catalog must be reachable over plain HTTP(S).
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let invalid = |reason: String| ServiceError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason,
    };

    if url_str.trim().is_empty() {
        return Err(invalid("catalog URL is empty".to_string()));
    }

    let url = Url::parse(url_str).map_err(|e| invalid(format!("not an absolute URL: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("scheme '{}' is not http or https", url.scheme())));
    }

    Ok(())
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ServiceError::MissingConfigError {
        field: field_name.to_string(),
    })
}
