use crate::error::{Error, Result};
use crate::runtime::Value;

/// Handle to a frame in an [`Environment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvId(usize);

impl EnvId {
    /// The session's global frame
    pub const ROOT: EnvId = EnvId(0);

    /// Raw slot index
    pub fn index(self) -> usize {
        self.0
    }
}

/// Single scope: ordered bindings plus a non-owning parent link
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Bindings in insertion order
    bindings: Vec<(String, Value)>,
    /// Enclosing frame (None for the global frame)
    parent: Option<EnvId>,
}

impl Frame {
    /// Creates an empty parentless frame
    pub fn new() -> Self {
        Frame::default()
    }

    /// Returns the parent link
    pub fn parent(&self) -> Option<EnvId> {
        self.parent
    }

    /// Reassigns the parent link
    pub fn set_parent(&mut self, parent: Option<EnvId>) {
        self.parent = parent;
    }

    /// Looks a name up in this frame only
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|(sym, _)| sym == name)
            .map(|(_, value)| value)
    }

    /// Replaces an existing binding in place or appends a new one
    pub fn put(&mut self, name: &str, value: Value) {
        match self.bindings.iter_mut().find(|(sym, _)| sym == name) {
            Some((_, slot)) => *slot = value,
            None => self.bindings.push((name.to_string(), value)),
        }
    }

    /// Bound names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(sym, _)| sym.as_str())
    }

    /// Number of local bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true when the frame has no local bindings
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Arena of frames forming the environment tree
///
/// Frames refer to their parents by [`EnvId`]. Slot 0 holds the global
/// frame, which lives for the whole session. Frames pushed for a lambda
/// invocation are released when the invocation returns and their slots
/// are reused.
#[derive(Debug)]
pub struct Environment {
    frames: Vec<Option<Frame>>,
    free: Vec<usize>,
}

impl Environment {
    /// Creates an environment holding only the empty global frame
    pub fn new() -> Self {
        Environment {
            frames: vec![Some(Frame::new())],
            free: Vec::new(),
        }
    }

    fn frame(&self, id: EnvId) -> &Frame {
        self.frames[id.0]
            .as_ref()
            .expect("environment frame used after release")
    }

    fn frame_mut(&mut self, id: EnvId) -> &mut Frame {
        self.frames[id.0]
            .as_mut()
            .expect("environment frame used after release")
    }

    /// Gets a copy of the value bound to `name`, searching outward from `env`
    pub fn get(&self, env: EnvId, name: &str) -> Result<Value> {
        let mut id = env;
        loop {
            let frame = self.frame(id);
            if let Some(value) = frame.lookup(name) {
                return Ok(value.clone());
            }
            match frame.parent {
                Some(parent) => id = parent,
                None => {
                    return Err(Error::UnboundSymbol {
                        name: name.to_string(),
                    })
                }
            }
        }
    }

    /// Binds `name` in `env` itself
    pub fn put(&mut self, env: EnvId, name: &str, value: Value) {
        self.frame_mut(env).put(name, value);
    }

    /// Returns the parentless frame at the top of `env`'s chain
    pub fn root_of(&self, env: EnvId) -> EnvId {
        let mut id = env;
        while let Some(parent) = self.frame(id).parent {
            id = parent;
        }
        id
    }

    /// Binds `name` in the outermost frame of `env`'s chain
    pub fn define_global(&mut self, env: EnvId, name: &str, value: Value) {
        let root = self.root_of(env);
        self.put(root, name, value);
    }

    /// Deep-copies the local bindings of `env` into a new frame with the same parent
    pub fn copy(&mut self, env: EnvId) -> EnvId {
        let frame = self.frame(env).clone();
        self.enter(frame)
    }

    /// Moves a frame into the arena
    pub fn enter(&mut self, frame: Frame) -> EnvId {
        match self.free.pop() {
            Some(slot) => {
                self.frames[slot] = Some(frame);
                EnvId(slot)
            }
            None => {
                self.frames.push(Some(frame));
                EnvId(self.frames.len() - 1)
            }
        }
    }

    /// Releases a frame, returning it. The global frame is never released.
    pub fn leave(&mut self, env: EnvId) -> Option<Frame> {
        if env == EnvId::ROOT {
            return None;
        }
        let frame = self.frames.get_mut(env.0)?.take()?;
        self.free.push(env.0);
        Some(frame)
    }

    /// Parent of `env`
    pub fn parent(&self, env: EnvId) -> Option<EnvId> {
        self.frame(env).parent
    }

    /// Number of frames from `env` to the root, inclusive
    pub fn depth(&self, env: EnvId) -> usize {
        let mut depth = 1;
        let mut id = env;
        while let Some(parent) = self.frame(id).parent {
            depth += 1;
            id = parent;
        }
        depth
    }

    /// Number of frames currently alive
    pub fn live_frames(&self) -> usize {
        self.frames.iter().filter(|f| f.is_some()).count()
    }

    /// Bound names of a single frame, in insertion order
    pub fn names(&self, env: EnvId) -> Vec<String> {
        self.frame(env).names().map(str::to_string).collect()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
