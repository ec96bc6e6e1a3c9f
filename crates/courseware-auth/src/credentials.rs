use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fmt;

/// Email and password taken from a single request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Parses `Basic <base64(email:password)>`.
///
/// The scheme is matched case-insensitively. The decoded payload must hold
/// exactly one `:`. Anything else (missing header, another scheme, bad
/// base64, non-UTF-8 payload) yields `None`.
pub fn extract_credentials(header: Option<&str>) -> Option<Credentials> {
    let (scheme, encoded) = header?.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;

    if decoded.matches(':').count() != 1 {
        return None;
    }

    let (email, password) = decoded.split_once(':')?;

    Some(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(payload: &str) -> String {
        format!("Basic {}", STANDARD.encode(payload))
    }

    #[test]
    fn test_valid_header() {
        let header = basic("joe@smith.com:password");
        let creds = extract_credentials(Some(&header)).unwrap();

        assert_eq!(creds.email, "joe@smith.com");
        assert_eq!(creds.password, "password");
    }

    #[test]
    fn test_rejects_more_than_one_separator() {
        assert!(extract_credentials(Some(&basic("joe@smith.com:pa:ss"))).is_none());
        assert!(extract_credentials(Some(&basic("::"))).is_none());
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let header = format!("bAsIc {}", STANDARD.encode("a@b.c:x"));
        assert!(extract_credentials(Some(&header)).is_some());
    }

    #[test]
    fn test_empty_email_still_parses() {
        let header = basic(":password");
        let creds = extract_credentials(Some(&header)).unwrap();

        assert!(creds.email.is_empty());
    }

    #[test]
    fn test_rejects_malformed_headers() {
        assert!(extract_credentials(None).is_none());
        assert!(extract_credentials(Some("")).is_none());
        assert!(extract_credentials(Some("Basic")).is_none());
        assert!(extract_credentials(Some("Bearer abc.def.ghi")).is_none());
        assert!(extract_credentials(Some("Basic !!!not-base64!!!")).is_none());
        assert!(extract_credentials(Some(&basic("no-separator"))).is_none());

        let not_utf8 = format!("Basic {}", STANDARD.encode([0xff, 0xfe, b':', b'x']));
        assert!(extract_credentials(Some(&not_utf8)).is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials {
            email: "joe@smith.com".to_string(),
            password: "hunter2".to_string(),
        };

        assert!(!format!("{:?}", creds).contains("hunter2"));
    }
}
