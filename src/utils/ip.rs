//! Client IP extraction
//!
//! The address recorded for a click is the TCP peer. `X-Forwarded-For` is
//! only honoured when the peer is one of the configured trusted proxies, in
//! which case its first hop is taken as the client.

use std::net::{IpAddr, SocketAddr};

use actix_web::HttpRequest;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
enum ProxyRule {
    Exact(IpAddr),
    Cidr(IpAddr, u8),
}

/// Parsed `server.trusted_proxies` list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedProxies {
    rules: Vec<ProxyRule>,
}

impl TrustedProxies {
    /// 解析配置中的 IP / CIDR 列表，无效条目记录警告后跳过
    pub fn parse(entries: &[String]) -> Self {
        let mut rules = Vec::with_capacity(entries.len());
        for entry in entries {
            match parse_rule(entry.trim()) {
                Some(rule) => rules.push(rule),
                None => warn!("Ignoring invalid trusted proxy entry: '{}'", entry),
            }
        }
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains(&self, ip: &IpAddr) -> bool {
        self.rules.iter().any(|rule| match rule {
            ProxyRule::Exact(addr) => addr == ip,
            ProxyRule::Cidr(network, prefix) => ip_in_network(ip, network, *prefix),
        })
    }
}

fn parse_rule(entry: &str) -> Option<ProxyRule> {
    match entry.split_once('/') {
        Some((network, prefix)) => {
            let network: IpAddr = network.parse().ok()?;
            let prefix: u8 = prefix.parse().ok()?;
            let max = if network.is_ipv4() { 32 } else { 128 };
            (prefix <= max).then_some(ProxyRule::Cidr(network, prefix))
        }
        None => entry.parse().ok().map(ProxyRule::Exact),
    }
}

fn ip_in_network(ip: &IpAddr, network: &IpAddr, prefix: u8) -> bool {
    match (ip, network) {
        (IpAddr::V4(ip), IpAddr::V4(net)) => {
            let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
            (u32::from(*ip) & mask) == (u32::from(*net) & mask)
        }
        (IpAddr::V6(ip), IpAddr::V6(net)) => {
            let mask = u128::MAX.checked_shl(128 - u32::from(prefix)).unwrap_or(0);
            (u128::from(*ip) & mask) == (u128::from(*net) & mask)
        }
        _ => false,
    }
}

/// 解析 peer 地址，兼容 `ip` 和 `ip:port` 两种形式
fn parse_peer(peer: &str) -> Option<IpAddr> {
    peer.parse::<SocketAddr>()
        .map(|s| s.ip())
        .or_else(|_| peer.parse::<IpAddr>())
        .ok()
}

/// Decide the client address from the peer and an optional forwarded header
pub fn resolve_client_ip(
    peer: Option<&str>,
    forwarded_for: Option<&str>,
    trusted: &TrustedProxies,
) -> Option<String> {
    let peer = peer?;
    let peer_ip = parse_peer(peer);

    if let Some(peer_ip) = peer_ip
        && trusted.contains(&peer_ip)
        && let Some(first_hop) = forwarded_for
            .and_then(|h| h.split(',').next())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    {
        debug!("Trusted proxy {} forwarded client {}", peer_ip, first_hop);
        return Some(first_hop.to_string());
    }

    Some(peer_ip.map_or_else(|| peer.to_string(), |ip| ip.to_string()))
}

/// 从 HttpRequest 提取客户端 IP
pub fn extract_client_ip(req: &HttpRequest, trusted: &TrustedProxies) -> Option<String> {
    let peer = req.peer_addr().map(|addr| addr.ip().to_string());
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok());
    resolve_client_ip(peer.as_deref(), forwarded, trusted)
}
