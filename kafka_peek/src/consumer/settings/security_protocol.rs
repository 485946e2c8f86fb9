use std::fmt::{Display, Formatter};

#[derive(Debug, Clone)]
pub enum SecurityProtocol {
    Plaintext,
    Ssl(SslSettings),
    SaslPlaintext(SaslSettings),
    SaslSsl(SaslSettings, SslSettings),
}

#[derive(Debug, Clone, Default)]
pub struct SslSettings {
    pub ca_location: Option<String>,
    pub certificate_location: Option<String>,
    pub key_location: Option<String>,
    pub key_password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SaslSettings {
    pub mechanism: SaslMechanism,
    pub username: String,
    pub password: Option<String>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SaslMechanism {
    Plain,
    ScramSha256,
    ScramSha512,
    Gssapi,
    OAuthBearer,
}

impl Display for SecurityProtocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityProtocol::Plaintext => write!(f, "plaintext"),
            SecurityProtocol::Ssl(_) => write!(f, "ssl"),
            SecurityProtocol::SaslPlaintext(_) => write!(f, "sasl_plaintext"),
            SecurityProtocol::SaslSsl(_, _) => write!(f, "sasl_ssl"),
        }
    }
}

impl Display for SaslMechanism {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SaslMechanism::Plain => write!(f, "PLAIN"),
            SaslMechanism::ScramSha256 => write!(f, "SCRAM-SHA-256"),
            SaslMechanism::ScramSha512 => write!(f, "SCRAM-SHA-512"),
            SaslMechanism::Gssapi => write!(f, "GSSAPI"),
            SaslMechanism::OAuthBearer => write!(f, "OAUTHBEARER"),
        }
    }
}
