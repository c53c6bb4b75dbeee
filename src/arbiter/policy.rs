//! Selection policy as an explicit decision table.
//!
//! | current valid | incoming valid      | network valid | outcome                         |
//! |---------------|---------------------|---------------|---------------------------------|
//! | no            | yes                 | -             | accept incoming                 |
//! | no            | no / absent         | yes           | fail over to stored network fix |
//! | no            | no / absent         | no            | drop to none (if one was held)  |
//! | yes           | yes, satellite      | -             | accept incoming                 |
//! | yes           | yes, network        | -             | refresh only if network is held |
//! | yes           | otherwise           | -             | keep                            |

use crate::core::Provider;

/// The new fix delivered with this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incoming {
    pub provider: Provider,
    pub valid: bool,
}

/// Everything the policy looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates {
    pub current_valid: bool,
    pub accepted_provider: Option<Provider>,
    pub incoming: Option<Incoming>,
    pub network_valid: bool,
}

/// What to do with the accepted position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Keep,
    AcceptIncoming { source_changed: bool },
    FailOverToNetwork,
    DropPosition,
}

impl Selection {
    pub fn source_changed(&self) -> bool {
        match self {
            Selection::Keep => false,
            Selection::AcceptIncoming { source_changed } => *source_changed,
            Selection::FailOverToNetwork | Selection::DropPosition => true,
        }
    }
}

pub fn select(candidates: &Candidates) -> Selection {
    let valid_incoming = candidates.incoming.filter(|incoming| incoming.valid);

    if !candidates.current_valid {
        if let Some(incoming) = valid_incoming {
            // a same-provider fix while the held one is invalid continues that source
            let source_changed = candidates.accepted_provider != Some(incoming.provider);
            Selection::AcceptIncoming { source_changed }
        } else if candidates.network_valid {
            Selection::FailOverToNetwork
        } else if candidates.accepted_provider.is_some() {
            Selection::DropPosition
        } else {
            Selection::Keep
        }
    } else {
        match (valid_incoming.map(|incoming| incoming.provider), candidates.accepted_provider) {
            (Some(Provider::Satellite), held) => Selection::AcceptIncoming {
                source_changed: held == Some(Provider::Network),
            },
            (Some(Provider::Network), Some(Provider::Network)) => {
                Selection::AcceptIncoming { source_changed: false }
            }
            _ => Selection::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incoming(provider: Provider, valid: bool) -> Option<Incoming> {
        Some(Incoming { provider, valid })
    }

    fn candidates(
        current_valid: bool,
        accepted_provider: Option<Provider>,
        incoming: Option<Incoming>,
        network_valid: bool,
    ) -> Candidates {
        Candidates {
            current_valid,
            accepted_provider,
            incoming,
            network_valid,
        }
    }

    #[test]
    fn test_invalid_current_accepts_valid_incoming() {
        let c = candidates(false, None, incoming(Provider::Network, true), true);
        assert_eq!(select(&c), Selection::AcceptIncoming { source_changed: true });

        let c = candidates(
            false,
            Some(Provider::Network),
            incoming(Provider::Satellite, true),
            false,
        );
        assert_eq!(select(&c), Selection::AcceptIncoming { source_changed: true });
    }

    #[test]
    fn test_invalid_current_same_provider_is_continuation() {
        let c = candidates(
            false,
            Some(Provider::Satellite),
            incoming(Provider::Satellite, true),
            false,
        );
        assert_eq!(select(&c), Selection::AcceptIncoming { source_changed: false });
    }

    #[test]
    fn test_invalid_current_fails_over_to_network() {
        let c = candidates(
            false,
            Some(Provider::Satellite),
            incoming(Provider::Satellite, false),
            true,
        );
        assert_eq!(select(&c), Selection::FailOverToNetwork);

        let c = candidates(false, Some(Provider::Satellite), None, true);
        assert_eq!(select(&c), Selection::FailOverToNetwork);
    }

    #[test]
    fn test_invalid_current_drops_to_none() {
        let c = candidates(false, Some(Provider::Satellite), None, false);
        assert_eq!(select(&c), Selection::DropPosition);
        assert!(select(&c).source_changed());
    }

    #[test]
    fn test_nothing_held_nothing_valid_keeps() {
        let c = candidates(false, None, incoming(Provider::Satellite, false), false);
        assert_eq!(select(&c), Selection::Keep);
        assert!(!select(&c).source_changed());
    }

    #[test]
    fn test_valid_current_upgrades_to_satellite() {
        let c = candidates(
            true,
            Some(Provider::Network),
            incoming(Provider::Satellite, true),
            true,
        );
        assert_eq!(select(&c), Selection::AcceptIncoming { source_changed: true });

        let c = candidates(
            true,
            Some(Provider::Satellite),
            incoming(Provider::Satellite, true),
            true,
        );
        assert_eq!(select(&c), Selection::AcceptIncoming { source_changed: false });
    }

    #[test]
    fn test_valid_satellite_beats_network() {
        let c = candidates(
            true,
            Some(Provider::Satellite),
            incoming(Provider::Network, true),
            true,
        );
        assert_eq!(select(&c), Selection::Keep);
    }

    #[test]
    fn test_valid_network_refreshes_network() {
        let c = candidates(
            true,
            Some(Provider::Network),
            incoming(Provider::Network, true),
            true,
        );
        assert_eq!(select(&c), Selection::AcceptIncoming { source_changed: false });
    }

    #[test]
    fn test_valid_current_ignores_invalid_incoming() {
        let c = candidates(
            true,
            Some(Provider::Network),
            incoming(Provider::Satellite, false),
            true,
        );
        assert_eq!(select(&c), Selection::Keep);
    }
}
