//! Shared scene state with explicit publish/subscribe.
//!
//! One `SceneController` exists per page. The platform layer feeds it scroll
//! and pointer samples from a single listener each; decorative elements
//! subscribe and compute their own offsets from the broadcast snapshot.

use crate::scene::{ParallaxStyle, SceneName, SceneThresholds};
use crate::scroll::{sample_scroll, ScrollSource};
use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// What subscribers receive on every change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSnapshot {
    pub scene: SceneName,
    pub progress: f32,
    pub style: ParallaxStyle,
    /// Pointer in `[-1, 1]²`, origin at the viewport centre.
    pub pointer: Vec2,
    /// Whether `scene` differs from the previous notification.
    pub scene_changed: bool,
}

impl SceneSnapshot {
    fn same_state(&self, other: &SceneSnapshot) -> bool {
        self.scene == other.scene
            && self.progress == other.progress
            && self.style == other.style
            && self.pointer == other.pointer
    }
}

type Callback = Rc<dyn Fn(&SceneSnapshot)>;

struct Inner {
    snapshot: SceneSnapshot,
    thresholds: SceneThresholds,
    subscribers: SmallVec<[(u64, Callback); 8]>,
    next_id: u64,
}

#[derive(Clone)]
pub struct SceneController {
    inner: Rc<RefCell<Inner>>,
}

impl SceneController {
    pub fn new(thresholds: SceneThresholds, style: ParallaxStyle) -> Self {
        let snapshot = SceneSnapshot {
            scene: thresholds.classify(0.0),
            progress: 0.0,
            style,
            pointer: Vec2::ZERO,
            scene_changed: false,
        };
        Self {
            inner: Rc::new(RefCell::new(Inner {
                snapshot,
                thresholds,
                subscribers: SmallVec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        self.inner.borrow().snapshot
    }

    pub fn scene(&self) -> SceneName {
        self.inner.borrow().snapshot.scene
    }

    pub fn progress(&self) -> f32 {
        self.inner.borrow().snapshot.progress
    }

    pub fn thresholds(&self) -> SceneThresholds {
        self.inner.borrow().thresholds
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Register `callback` and immediately deliver the current snapshot.
    /// The callback stays registered until the returned handle is dropped
    /// or [`Subscription::unsubscribe`] is called.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&SceneSnapshot) + 'static) -> Subscription {
        let callback: Callback = Rc::new(callback);
        let (id, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, callback.clone()));
            (id, inner.snapshot)
        };
        callback(&SceneSnapshot {
            scene_changed: false,
            ..snapshot
        });
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Take a scroll sample and broadcast it. Returns the sampled progress.
    pub fn sample(&self, source: &dyn ScrollSource) -> f32 {
        let progress = sample_scroll(source);
        self.set_progress(progress);
        progress
    }

    pub fn set_progress(&self, progress: f32) -> bool {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.update(|snap, thresholds| {
            snap.progress = progress;
            snap.scene = thresholds.classify(progress);
        })
    }

    pub fn set_style(&self, style: ParallaxStyle) -> bool {
        self.update(|snap, _| snap.style = style)
    }

    pub fn set_pointer(&self, pointer: Vec2) -> bool {
        let pointer = if pointer.is_finite() {
            pointer.clamp(Vec2::splat(-1.0), Vec2::ONE)
        } else {
            Vec2::ZERO
        };
        self.update(|snap, _| snap.pointer = pointer)
    }

    pub fn set_thresholds(&self, thresholds: SceneThresholds) -> bool {
        self.inner.borrow_mut().thresholds = thresholds;
        self.update(|snap, thresholds| snap.scene = thresholds.classify(snap.progress))
    }

    fn update(&self, apply: impl FnOnce(&mut SceneSnapshot, &SceneThresholds)) -> bool {
        let (next, callbacks) = {
            let mut inner = self.inner.borrow_mut();
            let prev = inner.snapshot;
            let mut next = prev;
            apply(&mut next, &inner.thresholds);
            if next.same_state(&prev) {
                return false;
            }
            next.scene_changed = next.scene != prev.scene;
            if next.scene_changed {
                log::info!(
                    "[scene] {} -> {} at {:.3}",
                    prev.scene,
                    next.scene,
                    next.progress
                );
            }
            inner.snapshot = next;
            let callbacks: SmallVec<[(u64, Callback); 8]> = inner.subscribers.clone();
            (next, callbacks)
        };
        // no borrow held: callbacks may subscribe, unsubscribe or read state
        for (id, callback) in callbacks {
            if self.is_subscribed(id) {
                callback(&next);
            }
        }
        true
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .any(|(sid, _)| *sid == id)
    }
}

impl Default for SceneController {
    fn default() -> Self {
        Self::new(SceneThresholds::default(), ParallaxStyle::default())
    }
}

/// Handle returned by [`SceneController::subscribe`].
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // removal happens in Drop
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.subscribers.retain(|(sid, _)| *sid != self.id);
            } else {
                log::warn!("[scene] unsubscribe {} while controller busy", self.id);
            }
        }
    }
}
