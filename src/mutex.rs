/*a Copyright

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

  http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.

@file    mutex.rs
@brief   Exclusive, recursive and shared mutexes
 */

//a Documentation
/*!
Manually locked and unlocked mutexes over the parking_lot raw
primitives.

These protect caller data rather than wrapping it: `lock` and `unlock`
are explicit calls, and the pairing is the caller's responsibility the
same way the acquire order is. Unlocking a mutex the calling thread
does not own is a programmer error with an undefined outcome; use the
[scoped locks](crate::ScopedLock) to have the pairing enforced by
scope. Ordering among blocked waiters is not guaranteed, and a mutex
whose owner died without unlocking must not be relied upon.
!*/

//a Imports
use lock_api::{RawMutex as _, RawRwLock as _};

//a Lockable
//tt Lockable
/// The exclusive-acquisition face shared by the three mutex kinds,
/// which is what the scoped locks operate through
pub trait Lockable {
    /// Block until the mutex is acquired in exclusive mode
    fn lock(&self);
    /// Acquire without blocking: true and acquired, or false and
    /// nothing happened
    fn try_lock(&self) -> bool;
    /// Release one exclusive acquisition; the calling thread must own
    /// one
    fn unlock(&self);
}

//a Mutex
//tp Mutex
/// An exclusive mutex: one holder at a time
pub struct Mutex {
    raw: parking_lot::RawMutex,
}

//ip Mutex
impl Mutex {
    //fp new
    /// Create an unlocked mutex
    pub const fn new() -> Self {
        Self {
            raw: <parking_lot::RawMutex as lock_api::RawMutex>::INIT,
        }
    }

    //mp lock
    /// Block until the mutex is acquired
    ///
    /// Locking a mutex the calling thread already owns deadlocks; use
    /// [RecursiveMutex] where re-entry is needed.
    pub fn lock(&self) {
        self.raw.lock();
    }

    //mp try_lock
    /// Acquire without blocking: true and acquired, or false and
    /// nothing happened
    pub fn try_lock(&self) -> bool {
        self.raw.try_lock()
    }

    //mp unlock
    /// Release the mutex; the calling thread must own it
    pub fn unlock(&self) {
        // Ownership is the caller's contract, as with the acquire
        // order
        unsafe { self.raw.unlock() }
    }
}

//ip Default for Mutex
impl Default for Mutex {
    fn default() -> Self {
        Self::new()
    }
}

//ip Lockable for Mutex
impl Lockable for Mutex {
    fn lock(&self) {
        Mutex::lock(self)
    }
    fn try_lock(&self) -> bool {
        Mutex::try_lock(self)
    }
    fn unlock(&self) {
        Mutex::unlock(self)
    }
}

//a RecursiveMutex
//tp RecursiveMutex
/// A recursive mutex: the owning thread may lock it again, and must
/// unlock once per lock before another thread can acquire it
pub struct RecursiveMutex {
    raw: lock_api::RawReentrantMutex<parking_lot::RawMutex, parking_lot::RawThreadId>,
}

//ip RecursiveMutex
impl RecursiveMutex {
    //fp new
    /// Create an unlocked recursive mutex
    pub const fn new() -> Self {
        Self {
            raw: lock_api::RawReentrantMutex::INIT,
        }
    }

    //mp lock
    /// Block until the mutex is acquired; the owning thread acquires
    /// again immediately
    pub fn lock(&self) {
        self.raw.lock();
    }

    //mp try_lock
    /// Acquire without blocking: true and acquired, or false and
    /// nothing happened
    pub fn try_lock(&self) -> bool {
        self.raw.try_lock()
    }

    //mp unlock
    /// Release one acquisition; the calling thread must own at least
    /// one
    pub fn unlock(&self) {
        unsafe { self.raw.unlock() }
    }
}

//ip Default for RecursiveMutex
impl Default for RecursiveMutex {
    fn default() -> Self {
        Self::new()
    }
}

//ip Lockable for RecursiveMutex
impl Lockable for RecursiveMutex {
    fn lock(&self) {
        RecursiveMutex::lock(self)
    }
    fn try_lock(&self) -> bool {
        RecursiveMutex::try_lock(self)
    }
    fn unlock(&self) {
        RecursiveMutex::unlock(self)
    }
}

//a SharedMutex
//tp SharedMutex
/// A shared (reader-writer) mutex: one exclusive holder, or any
/// number of shared holders
///
/// Whether writers starve under a stream of readers is down to the
/// underlying primitive and not guaranteed here.
pub struct SharedMutex {
    raw: parking_lot::RawRwLock,
}

//ip SharedMutex
impl SharedMutex {
    //fp new
    /// Create an unlocked shared mutex
    pub const fn new() -> Self {
        Self {
            raw: <parking_lot::RawRwLock as lock_api::RawRwLock>::INIT,
        }
    }

    //mp lock
    /// Block until the mutex is acquired in exclusive mode
    pub fn lock(&self) {
        self.raw.lock_exclusive();
    }

    //mp try_lock
    /// Acquire exclusively without blocking
    pub fn try_lock(&self) -> bool {
        self.raw.try_lock_exclusive()
    }

    //mp unlock
    /// Release an exclusive acquisition; the calling thread must own
    /// it
    pub fn unlock(&self) {
        unsafe { self.raw.unlock_exclusive() }
    }

    //mp lock_shared
    /// Block until the mutex is acquired in shared mode; many threads
    /// may hold it shared at once
    pub fn lock_shared(&self) {
        self.raw.lock_shared();
    }

    //mp try_lock_shared
    /// Acquire in shared mode without blocking
    pub fn try_lock_shared(&self) -> bool {
        self.raw.try_lock_shared()
    }

    //mp unlock_shared
    /// Release one shared acquisition; the calling thread must own
    /// one
    pub fn unlock_shared(&self) {
        unsafe { self.raw.unlock_shared() }
    }
}

//ip Default for SharedMutex
impl Default for SharedMutex {
    fn default() -> Self {
        Self::new()
    }
}

//ip Lockable for SharedMutex
impl Lockable for SharedMutex {
    fn lock(&self) {
        SharedMutex::lock(self)
    }
    fn try_lock(&self) -> bool {
        SharedMutex::try_lock(self)
    }
    fn unlock(&self) {
        SharedMutex::unlock(self)
    }
}

//a Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutex_try_lock_reports_contention() {
        let m = Mutex::new();
        assert!(m.try_lock());
        std::thread::scope(|s| {
            s.spawn(|| {
                assert!(!m.try_lock());
            });
        });
        m.unlock();
        assert!(m.try_lock());
        m.unlock();
    }

    #[test]
    fn recursive_mutex_relocks_on_owner() {
        let m = RecursiveMutex::new();
        m.lock();
        m.lock();
        assert!(m.try_lock());
        m.unlock();
        m.unlock();
        m.unlock();
    }

    #[test]
    fn shared_mutex_modes() {
        let m = SharedMutex::new();
        m.lock_shared();
        assert!(m.try_lock_shared());
        assert!(!m.try_lock());
        m.unlock_shared();
        m.unlock_shared();
        assert!(m.try_lock());
        assert!(!m.try_lock_shared());
        m.unlock();
    }
}
