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

@file    scoped_lock.rs
@brief   Scope-bound single and paired mutex acquisition
 */

//a Imports
use crate::mutex::Lockable;

//a ScopedLock
//tp ScopedLock
/// A value owning zero or one exclusive acquisition of a mutex for
/// its lexical scope
///
/// Dropping the guard releases the acquisition if one is held, on
/// every exit path including unwinding.
pub struct ScopedLock<'a, M: Lockable> {
    mutex: &'a M,
    owner: bool,
}

//ip ScopedLock
impl<'a, M: Lockable> ScopedLock<'a, M> {
    //fp new
    /// Wrap a mutex, acquiring it immediately when `lock_now` is set
    pub fn new(mutex: &'a M, lock_now: bool) -> Self {
        if lock_now {
            mutex.lock();
        }
        Self {
            mutex,
            owner: lock_now,
        }
    }

    //mp lock
    /// Block until the mutex is acquired; the guard must not already
    /// own it
    pub fn lock(&mut self) {
        debug_assert!(!self.owner, "The guard already owns the mutex");
        self.mutex.lock();
        self.owner = true;
    }

    //mp try_lock
    /// Acquire without blocking; returns whether the guard now owns
    /// the mutex
    pub fn try_lock(&mut self) -> bool {
        debug_assert!(!self.owner, "The guard already owns the mutex");
        self.owner = self.mutex.try_lock();
        self.owner
    }

    //mp unlock
    /// Release the acquisition before the end of the scope; the guard
    /// must own it
    pub fn unlock(&mut self) {
        debug_assert!(self.owner, "The guard does not own the mutex");
        self.mutex.unlock();
        self.owner = false;
    }

    //mp is_owner
    /// True while the guard holds its acquisition
    pub fn is_owner(&self) -> bool {
        self.owner
    }
}

//ip Drop for ScopedLock
impl<M: Lockable> Drop for ScopedLock<'_, M> {
    fn drop(&mut self) {
        if self.owner {
            self.mutex.unlock();
        }
    }
}

//a ScopedLockPair
//tp ScopedLockPair
/// A value owning zero or one exclusive acquisition of each of two
/// mutexes for its lexical scope
///
/// Acquisition of the two is deadlock-safe against any other order the
/// rest of the program uses: [ScopedLockPair::lock] locks one mutex,
/// tries the other, and on failure releases what it holds and retries
/// starting from the other side, so it never holds one while blocking
/// on the other.
pub struct ScopedLockPair<'a, M1: Lockable, M2: Lockable> {
    mutex1: &'a M1,
    mutex2: &'a M2,
    owner: bool,
}

//ip ScopedLockPair
impl<'a, M1: Lockable, M2: Lockable> ScopedLockPair<'a, M1, M2> {
    //fp new
    /// Wrap two mutexes, acquiring both immediately when `lock_now`
    /// is set
    pub fn new(mutex1: &'a M1, mutex2: &'a M2, lock_now: bool) -> Self {
        let mut r = Self {
            mutex1,
            mutex2,
            owner: false,
        };
        if lock_now {
            r.lock();
        }
        r
    }

    //mp lock
    /// Block until both mutexes are acquired; the guard must not
    /// already own them
    pub fn lock(&mut self) {
        debug_assert!(!self.owner, "The guard already owns the mutexes");
        loop {
            self.mutex1.lock();
            if self.mutex2.try_lock() {
                break;
            }
            self.mutex1.unlock();

            self.mutex2.lock();
            if self.mutex1.try_lock() {
                break;
            }
            self.mutex2.unlock();
        }
        self.owner = true;
    }

    //mp try_lock
    /// Acquire both without blocking: either both are acquired and
    /// true is returned, or neither is held
    pub fn try_lock(&mut self) -> bool {
        debug_assert!(!self.owner, "The guard already owns the mutexes");
        if self.mutex1.try_lock() {
            if self.mutex2.try_lock() {
                self.owner = true;
            } else {
                self.mutex1.unlock();
            }
        }
        self.owner
    }

    //mp unlock
    /// Release both acquisitions before the end of the scope; the
    /// guard must own them
    pub fn unlock(&mut self) {
        debug_assert!(self.owner, "The guard does not own the mutexes");
        self.mutex2.unlock();
        self.mutex1.unlock();
        self.owner = false;
    }

    //mp is_owner
    /// True while the guard holds both acquisitions
    pub fn is_owner(&self) -> bool {
        self.owner
    }
}

//ip Drop for ScopedLockPair
impl<M1: Lockable, M2: Lockable> Drop for ScopedLockPair<'_, M1, M2> {
    fn drop(&mut self) {
        if self.owner {
            self.mutex2.unlock();
            self.mutex1.unlock();
        }
    }
}
