use std::collections::HashMap;

use super::{
    channel::{Channel, ChannelDirection, ChannelKind},
    error::ChannelError,
};

/// Registry of channels, assigning network ids in registration order
pub struct ChannelKinds {
    current_net_id: u16,
    kind_map: HashMap<ChannelKind, (u16, ChannelDirection)>,
    net_id_map: HashMap<u16, ChannelKind>,
}

impl ChannelKinds {
    pub fn new() -> Self {
        Self {
            current_net_id: 0,
            kind_map: HashMap::new(),
            net_id_map: HashMap::new(),
        }
    }

    /// Registers `C`. Registering the same channel twice keeps the first
    /// network id and updates its direction.
    pub fn add_channel<C: Channel>(&mut self, direction: ChannelDirection) {
        let kind = ChannelKind::of::<C>();
        if let Some((_, existing)) = self.kind_map.get_mut(&kind) {
            *existing = direction;
            return;
        }
        let net_id = self.current_net_id;
        self.kind_map.insert(kind, (net_id, direction));
        self.net_id_map.insert(net_id, kind);
        self.current_net_id += 1;
    }

    pub fn net_id(&self, kind: &ChannelKind) -> Result<u16, ChannelError> {
        self.kind_map
            .get(kind)
            .map(|(net_id, _)| *net_id)
            .ok_or(ChannelError::ChannelKindNotFound {
                channel: kind.name().to_string(),
            })
    }

    pub fn kind(&self, net_id: u16) -> Result<ChannelKind, ChannelError> {
        self.net_id_map
            .get(&net_id)
            .copied()
            .ok_or(ChannelError::NetIdNotFound { net_id })
    }

    pub fn direction(&self, kind: &ChannelKind) -> Result<ChannelDirection, ChannelError> {
        self.kind_map
            .get(kind)
            .map(|(_, direction)| *direction)
            .ok_or(ChannelError::ChannelKindNotFound {
                channel: kind.name().to_string(),
            })
    }

    /// Registered channels ordered by network id
    pub fn channels(&self) -> Vec<(ChannelKind, ChannelDirection)> {
        (0..self.current_net_id)
            .filter_map(|net_id| self.net_id_map.get(&net_id))
            .filter_map(|kind| self.kind_map.get(kind).map(|(_, direction)| (*kind, *direction)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.kind_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kind_map.is_empty()
    }
}

impl Default for ChannelKinds {
    fn default() -> Self {
        Self::new()
    }
}
