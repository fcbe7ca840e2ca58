//! Host callback registry
//!
//! Scripts attach handlers per callback kind, announce the kinds they need to
//! the host once, and the host then calls [`Callbacks::fire`] every time it
//! runs that callback (for `Draw`, once per rendered frame).
//!
//! Handlers for one kind run in the order they were added. A handler error
//! stops the remaining handlers of that dispatch.

use std::collections::HashMap;
use std::fmt;

use slotmap::{new_key_type, SlotMap};

use crate::host::{CallbackRegistrar, HostError};

new_key_type! {
    /// Handle returned by [`Callbacks::on`]
    pub struct CallbackId;
}

/// Host callback kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    /// Once per rendered frame; drawing is only valid here
    Draw,
    /// Once per game tick, before movement is sent
    CreateMove,
    /// Script is being unloaded
    Unload,
}

impl CallbackKind {
    /// Every kind in registration order
    pub const ALL: [Self; 3] = [Self::Draw, Self::CreateMove, Self::Unload];

    /// Name the host uses for this callback
    pub const fn name(self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::CreateMove => "CreateMove",
            Self::Unload => "Unload",
        }
    }
}

impl fmt::Display for CallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Handler<C> = Box<dyn FnMut(&mut C) -> Result<(), HostError>>;

/// Callback registry, generic over the per-dispatch context `C`
pub struct Callbacks<C> {
    handlers: SlotMap<CallbackId, Handler<C>>,
    order: HashMap<CallbackKind, Vec<CallbackId>>,
    registered: Vec<CallbackKind>,
}

impl<C> Callbacks<C> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            handlers: SlotMap::with_key(),
            order: HashMap::new(),
            registered: Vec::new(),
        }
    }

    /// Attach a handler to `kind`
    pub fn on<F>(&mut self, kind: CallbackKind, handler: F) -> CallbackId
    where
        F: FnMut(&mut C) -> Result<(), HostError> + 'static,
    {
        let id = self.handlers.insert(Box::new(handler));
        self.order.entry(kind).or_default().push(id);
        log::debug!("Added {kind} handler {id:?}");
        id
    }

    /// Detach a handler; returns `false` if it was already gone
    pub fn off(&mut self, id: CallbackId) -> bool {
        if self.handlers.remove(id).is_none() {
            return false;
        }
        for ids in self.order.values_mut() {
            ids.retain(|&other| other != id);
        }
        true
    }

    /// Number of handlers attached to `kind`
    pub fn handler_count(&self, kind: CallbackKind) -> usize {
        self.order.get(&kind).map_or(0, Vec::len)
    }

    /// Announce every kind with handlers to the host
    ///
    /// Kinds already announced by an earlier call are skipped.
    pub fn register_callbacks(&mut self, registrar: &mut dyn CallbackRegistrar) -> Result<(), HostError> {
        for kind in CallbackKind::ALL {
            if self.handler_count(kind) == 0 || self.registered.contains(&kind) {
                continue;
            }
            registrar.register_callback(kind)?;
            self.registered.push(kind);
            log::info!("Registered {kind} callback with host");
        }
        Ok(())
    }

    /// Run all handlers for `kind`; returns how many ran
    pub fn fire(&mut self, kind: CallbackKind, ctx: &mut C) -> Result<usize, HostError> {
        let Some(ids) = self.order.get(&kind) else {
            return Ok(0);
        };

        let mut ran = 0;
        for id in ids.clone() {
            if let Some(handler) = self.handlers.get_mut(id) {
                handler(&mut *ctx)?;
                ran += 1;
            }
        }
        Ok(ran)
    }
}

impl<C> Default for Callbacks<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    #[test]
    fn test_fire_runs_in_insertion_order() {
        let mut callbacks: Callbacks<Vec<u32>> = Callbacks::new();
        callbacks.on(CallbackKind::Draw, |log| {
            log.push(1);
            Ok(())
        });
        callbacks.on(CallbackKind::Draw, |log| {
            log.push(2);
            Ok(())
        });
        callbacks.on(CallbackKind::Unload, |log| {
            log.push(99);
            Ok(())
        });

        let mut log = Vec::new();
        assert_eq!(callbacks.fire(CallbackKind::Draw, &mut log), Ok(2));
        assert_eq!(log, vec![1, 2]);
        assert_eq!(callbacks.fire(CallbackKind::CreateMove, &mut log), Ok(0));
    }

    #[test]
    fn test_off_removes_handler() {
        let mut callbacks: Callbacks<u32> = Callbacks::new();
        let id = callbacks.on(CallbackKind::Draw, |n| {
            *n += 1;
            Ok(())
        });
        assert!(callbacks.off(id));
        assert!(!callbacks.off(id));

        let mut n = 0;
        callbacks.fire(CallbackKind::Draw, &mut n).unwrap();
        assert_eq!(n, 0);
        assert_eq!(callbacks.handler_count(CallbackKind::Draw), 0);
    }

    #[test]
    fn test_error_stops_dispatch() {
        let mut callbacks: Callbacks<u32> = Callbacks::new();
        callbacks.on(CallbackKind::Draw, |_| Err(HostError::Render("boom".to_string())));
        callbacks.on(CallbackKind::Draw, |n| {
            *n += 1;
            Ok(())
        });

        let mut n = 0;
        assert_eq!(
            callbacks.fire(CallbackKind::Draw, &mut n),
            Err(HostError::Render("boom".to_string()))
        );
        assert_eq!(n, 0);
    }

    #[test]
    fn test_register_announces_each_kind_once() {
        let mut host = RecordingHost::new();
        let mut callbacks: Callbacks<()> = Callbacks::new();
        callbacks.on(CallbackKind::Unload, |_| Ok(()));
        callbacks.on(CallbackKind::Draw, |_| Ok(()));
        callbacks.on(CallbackKind::Draw, |_| Ok(()));

        callbacks.register_callbacks(&mut host).unwrap();
        callbacks.register_callbacks(&mut host).unwrap();
        assert_eq!(host.registered_callbacks(), &[CallbackKind::Draw, CallbackKind::Unload]);
    }
}
