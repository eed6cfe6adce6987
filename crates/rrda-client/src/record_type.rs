//! Record types served by the RRDA API.

use std::fmt;
use std::str::FromStr;

/// A DNS record type the RRDA API can be queried for.
///
/// Each variant maps to the path suffix the service expects after the
/// query target, e.g. [`RecordType::NSEC3PARAM`] is requested as
/// `/<target>/nsec3param`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    A,
    AAAA,
    CERT,
    CNAME,
    DHCID,
    DLV,
    DNAME,
    DNSKEY,
    DS,
    HINFO,
    HIP,
    IPSECKEY,
    KX,
    LOC,
    MX,
    NAPTR,
    NS,
    NSEC,
    NSEC3,
    NSEC3PARAM,
    OPT,
    PTR,
    RRSIG,
    SOA,
    SPF,
    SRV,
    SSHFP,
    TA,
    TALINK,
    TLSA,
    TXT,
}

impl RecordType {
    /// Every supported record type, in suffix order.
    pub const ALL: [RecordType; 31] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CERT,
        RecordType::CNAME,
        RecordType::DHCID,
        RecordType::DLV,
        RecordType::DNAME,
        RecordType::DNSKEY,
        RecordType::DS,
        RecordType::HINFO,
        RecordType::HIP,
        RecordType::IPSECKEY,
        RecordType::KX,
        RecordType::LOC,
        RecordType::MX,
        RecordType::NAPTR,
        RecordType::NS,
        RecordType::NSEC,
        RecordType::NSEC3,
        RecordType::NSEC3PARAM,
        RecordType::OPT,
        RecordType::PTR,
        RecordType::RRSIG,
        RecordType::SOA,
        RecordType::SPF,
        RecordType::SRV,
        RecordType::SSHFP,
        RecordType::TA,
        RecordType::TALINK,
        RecordType::TLSA,
        RecordType::TXT,
    ];

    /// The URL path suffix for this type.
    pub fn suffix(&self) -> &'static str {
        match self {
            RecordType::A => "a",
            RecordType::AAAA => "aaaa",
            RecordType::CERT => "cert",
            RecordType::CNAME => "cname",
            RecordType::DHCID => "dhcid",
            RecordType::DLV => "dlv",
            RecordType::DNAME => "dname",
            RecordType::DNSKEY => "dnskey",
            RecordType::DS => "ds",
            RecordType::HINFO => "hinfo",
            RecordType::HIP => "hip",
            RecordType::IPSECKEY => "ipseckey",
            RecordType::KX => "kx",
            RecordType::LOC => "loc",
            RecordType::MX => "mx",
            RecordType::NAPTR => "naptr",
            RecordType::NS => "ns",
            RecordType::NSEC => "nsec",
            RecordType::NSEC3 => "nsec3",
            RecordType::NSEC3PARAM => "nsec3param",
            RecordType::OPT => "opt",
            RecordType::PTR => "ptr",
            RecordType::RRSIG => "rrsig",
            RecordType::SOA => "soa",
            RecordType::SPF => "spf",
            RecordType::SRV => "srv",
            RecordType::SSHFP => "sshfp",
            RecordType::TA => "ta",
            RecordType::TALINK => "talink",
            RecordType::TLSA => "tlsa",
            RecordType::TXT => "txt",
        }
    }

    /// The mnemonic as it appears in zone files and in responses.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CERT => "CERT",
            RecordType::CNAME => "CNAME",
            RecordType::DHCID => "DHCID",
            RecordType::DLV => "DLV",
            RecordType::DNAME => "DNAME",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::DS => "DS",
            RecordType::HINFO => "HINFO",
            RecordType::HIP => "HIP",
            RecordType::IPSECKEY => "IPSECKEY",
            RecordType::KX => "KX",
            RecordType::LOC => "LOC",
            RecordType::MX => "MX",
            RecordType::NAPTR => "NAPTR",
            RecordType::NS => "NS",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::OPT => "OPT",
            RecordType::PTR => "PTR",
            RecordType::RRSIG => "RRSIG",
            RecordType::SOA => "SOA",
            RecordType::SPF => "SPF",
            RecordType::SRV => "SRV",
            RecordType::SSHFP => "SSHFP",
            RecordType::TA => "TA",
            RecordType::TALINK => "TALINK",
            RecordType::TLSA => "TLSA",
            RecordType::TXT => "TXT",
        }
    }

    /// Human-readable name of the record type.
    pub fn description(&self) -> &'static str {
        match self {
            RecordType::A => "Host Address",
            RecordType::AAAA => "IPv6 Host Address",
            RecordType::CERT => "Certificate",
            RecordType::CNAME => "Canonical Name",
            RecordType::DHCID => "DHCP Identifier",
            RecordType::DLV => "DNSSEC Lookaside Validation",
            RecordType::DNAME => "Delegation Name",
            RecordType::DNSKEY => "DNS Key",
            RecordType::DS => "Delegation Signer",
            RecordType::HINFO => "Host Information",
            RecordType::HIP => "Host Identity Protocol",
            RecordType::IPSECKEY => "IPsec Key",
            RecordType::KX => "Key Exchanger",
            RecordType::LOC => "Location",
            RecordType::MX => "Mail Exchange",
            RecordType::NAPTR => "Name Authority Pointer",
            RecordType::NS => "Name Server",
            RecordType::NSEC => "Next Secure",
            RecordType::NSEC3 => "Next Secure v3",
            RecordType::NSEC3PARAM => "NSEC3 Parameters",
            RecordType::OPT => "Option",
            RecordType::PTR => "Pointer",
            RecordType::RRSIG => "Resource Record Signature",
            RecordType::SOA => "Start of Authority",
            RecordType::SPF => "Sender Policy Framework",
            RecordType::SRV => "Service Locator",
            RecordType::SSHFP => "SSH Public Key Fingerprint",
            RecordType::TA => "DNSSEC Trust Authorities",
            RecordType::TALINK => "Trust Anchor Link",
            RecordType::TLSA => "TLSA Certificate Association",
            RecordType::TXT => "Text",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Error returned when a string names no supported record type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported record type: {0}")]
pub struct ParseRecordTypeError(pub String);

impl FromStr for RecordType {
    type Err = ParseRecordTypeError;

    /// Compares against the suffix, ignoring case, so mnemonics such as
    /// `NSEC3PARAM` match too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .into_iter()
            .find(|rt| rt.suffix().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseRecordTypeError(s.to_string()))
    }
}
