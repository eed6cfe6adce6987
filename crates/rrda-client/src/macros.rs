//! Named lookup methods, one per record type.
//!
//! `record_lookups!(emit)` invokes `emit!` with the full table so the async and
//! blocking clients expose the same method set.

macro_rules! record_lookups {
    ($emit:ident) => {
        $emit! {
            /// Look up A (host address) records.
            a_lookup => A;
            /// Look up AAAA (IPv6 host address) records.
            aaaa_lookup => AAAA;
            /// Look up CERT (certificate) records.
            cert_lookup => CERT;
            /// Look up CNAME (canonical name) records, e.g. for `cname.statdns.net`.
            cname_lookup => CNAME;
            /// Look up DHCID (DHCP identifier) records.
            dhcid_lookup => DHCID;
            /// Look up DLV (DNSSEC lookaside validation) records.
            dlv_lookup => DLV;
            /// Look up DNAME (delegation name) records, e.g. for `dname.statdns.net`.
            dname_lookup => DNAME;
            /// Look up DNSKEY (DNS key) records.
            dnskey_lookup => DNSKEY;
            /// Look up DS (delegation signer) records.
            ds_lookup => DS;
            /// Look up HINFO (host information) records.
            hinfo_lookup => HINFO;
            /// Look up HIP (host identity protocol) records.
            hip_lookup => HIP;
            /// Look up IPSECKEY (IPsec key) records.
            ipseckey_lookup => IPSECKEY;
            /// Look up KX (key exchanger) records.
            kx_lookup => KX;
            /// Look up LOC (location) records.
            loc_lookup => LOC;
            /// Look up MX (mail exchange) records.
            mx_lookup => MX;
            /// Look up NAPTR (name authority pointer) records.
            naptr_lookup => NAPTR;
            /// Look up NS (name server) records.
            ns_lookup => NS;
            /// Look up NSEC (next secure) records.
            nsec_lookup => NSEC;
            /// Look up NSEC3 records. The target is the hashed owner name,
            /// e.g. `<hash>.statdns.net`.
            nsec3_lookup => NSEC3;
            /// Look up NSEC3PARAM (NSEC3 parameters) records.
            nsec3param_lookup => NSEC3PARAM;
            /// Look up OPT (option) records.
            opt_lookup => OPT;
            /// Look up PTR (pointer) records by reverse name, e.g.
            /// `8.8.8.8.in-addr.arpa`. See also `reverse_lookup`.
            ptr_lookup => PTR;
            /// Look up RRSIG (resource record signature) records.
            rrsig_lookup => RRSIG;
            /// Look up the SOA (start of authority) record.
            soa_lookup => SOA;
            /// Look up SPF (sender policy framework) records.
            spf_lookup => SPF;
            /// Look up SRV (service locator) records, e.g. for
            /// `_sip._tcp.statdns.net`.
            srv_lookup => SRV;
            /// Look up SSHFP (SSH public key fingerprint) records.
            sshfp_lookup => SSHFP;
            /// Look up TA (DNSSEC trust authorities) records.
            ta_lookup => TA;
            /// Look up TALINK (trust anchor link) records.
            talink_lookup => TALINK;
            /// Look up TLSA records, e.g. for `_443._tcp.www.statdns.net`.
            tlsa_lookup => TLSA;
            /// Look up TXT (text) records.
            txt_lookup => TXT;
        }
    };
}
