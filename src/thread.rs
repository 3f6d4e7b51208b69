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

@file    thread.rs
@brief   OS thread lifecycle wrapper
 */

//a Imports
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::this_thread::{self, InterruptFlag};

//a ThreadPriority
//tp ThreadPriority
/// The scheduling priority of a thread, in five steps
///
/// On unix the five steps map onto the `SCHED_OTHER` priority range
/// split in thirds, with Lowest and Highest pinned to the ends. Stock
/// Linux exposes an empty range for `SCHED_OTHER`, so every thread
/// reads back as [ThreadPriority::Normal] there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThreadPriority {
    /// The minimum priority of the scheduling policy
    Lowest,
    /// A third of the way up the priority range
    Low,
    /// The middle of the priority range
    #[default]
    Normal,
    /// A third of the way down from the top of the range
    High,
    /// The maximum priority of the scheduling policy
    Highest,
}

//ip Display for ThreadPriority
impl std::fmt::Display for ThreadPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            ThreadPriority::Lowest => "Lowest",
            ThreadPriority::Low => "Low",
            ThreadPriority::Normal => "Normal",
            ThreadPriority::High => "High",
            ThreadPriority::Highest => "Highest",
        };
        write!(f, "{}", s)
    }
}

//a Native priority mapping
#[cfg(unix)]
pub(crate) mod native {
    use super::ThreadPriority;

    //fi sched_range
    /// The SCHED_OTHER priority range; maximum is not assured to
    /// exceed minimum
    fn sched_range() -> (i32, i32) {
        unsafe {
            (
                libc::sched_get_priority_min(libc::SCHED_OTHER),
                libc::sched_get_priority_max(libc::SCHED_OTHER),
            )
        }
    }

    //fp to_native
    /// Map a priority level to a SCHED_OTHER native priority
    pub fn to_native(priority: ThreadPriority) -> i32 {
        let (min, max) = sched_range();
        if max <= min {
            return min;
        }
        let part = (max - min) / 3;
        match priority {
            ThreadPriority::Lowest => min,
            ThreadPriority::Low => min + part,
            ThreadPriority::Normal => min + (max - min) / 2,
            ThreadPriority::High => max - part,
            ThreadPriority::Highest => max,
        }
    }

    //fp of_native
    /// Map a native priority back onto the five levels
    pub fn of_native(native: i32) -> ThreadPriority {
        let (min, max) = sched_range();
        if max <= min {
            return ThreadPriority::Normal;
        }
        let part = (max - min) / 3;
        if native == max {
            ThreadPriority::Highest
        } else if native == min {
            ThreadPriority::Lowest
        } else if native >= max - part {
            ThreadPriority::High
        } else if native <= min + part {
            ThreadPriority::Low
        } else {
            ThreadPriority::Normal
        }
    }

    //fp set
    /// Apply a priority level to a pthread; failure (such as missing
    /// permission) is logged and otherwise ignored
    pub fn set(handle: libc::pthread_t, priority: ThreadPriority) {
        let param = libc::sched_param {
            sched_priority: to_native(priority),
        };
        let result = unsafe { libc::pthread_setschedparam(handle, libc::SCHED_OTHER, &param) };
        if result != 0 {
            log::warn!(
                "could not set the priority of Thread({:x}) to {}: error {}",
                handle as u64,
                priority,
                result
            );
        }
    }

    //fp get
    /// Read a pthread's priority level; failure reads as Normal
    pub fn get(handle: libc::pthread_t) -> ThreadPriority {
        let mut policy: libc::c_int = 0;
        let mut param = libc::sched_param { sched_priority: 0 };
        let result = unsafe { libc::pthread_getschedparam(handle, &mut policy, &mut param) };
        if result != 0 {
            log::warn!(
                "could not get the priority of Thread({:x}): error {}",
                handle as u64,
                result
            );
            return ThreadPriority::Normal;
        }
        of_native(param.sched_priority)
    }
}

#[cfg(not(unix))]
pub(crate) mod native {
    use super::ThreadPriority;

    pub fn set(_handle: u64, priority: ThreadPriority) {
        log::warn!(
            "thread priorities are not supported on this platform; ignoring {}",
            priority
        );
    }

    pub fn get(_handle: u64) -> ThreadPriority {
        ThreadPriority::Normal
    }
}

//a Thread
//tp Thread
/// A handle to a live OS thread, constructed-and-started in one step
///
/// The handle exclusively owns the thread until [Thread::detach]; it
/// cannot be copied, and it must be either joined or detached before
/// being dropped (debug-asserted). The thread runs the supplied
/// closure, which captures its arguments by move.
///
/// Interruption is cooperative: [Thread::interrupt] raises a flag that
/// the library's own suspension points observe and that the thread's
/// code can poll through
/// [this_thread::is_interrupted](crate::this_thread::is_interrupted);
/// nothing is preempted.
pub struct Thread {
    handle: Option<JoinHandle<()>>,
    interrupt: Arc<InterruptFlag>,
    id: Option<std::thread::ThreadId>,
    native: u64,
}

//ip Thread
impl Thread {
    //fp spawn
    /// Start a new OS thread running the closure
    ///
    /// If the OS refuses to create a thread the failure is logged and
    /// the returned handle is not alive.
    pub fn spawn<W>(work: W) -> Self
    where
        W: FnOnce() + Send + 'static,
    {
        let interrupt = Arc::new(InterruptFlag::new());
        let child_flag = Arc::clone(&interrupt);
        let spawned = std::thread::Builder::new().spawn(move || {
            this_thread::adopt_interrupt_flag(child_flag);
            work()
        });
        match spawned {
            Ok(handle) => {
                let id = handle.thread().id();
                let native = Self::native_of(&handle);
                Self {
                    handle: Some(handle),
                    interrupt,
                    id: Some(id),
                    native,
                }
            }
            Err(error) => {
                log::warn!("could not start a thread: {}", error);
                Self {
                    handle: None,
                    interrupt,
                    id: None,
                    native: 0,
                }
            }
        }
    }

    //fi native_of
    #[cfg(unix)]
    fn native_of(handle: &JoinHandle<()>) -> u64 {
        use std::os::unix::thread::JoinHandleExt;
        handle.as_pthread_t() as u64
    }
    #[cfg(not(unix))]
    fn native_of(handle: &JoinHandle<()>) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        handle.thread().id().hash(&mut hasher);
        hasher.finish()
    }

    //mp join
    /// Block until the thread finishes
    ///
    /// Joining the current thread is a deadlock and joining from an
    /// interrupted thread is a contract violation; both are
    /// debug-asserted. A panic in the thread's closure is resumed on
    /// the joining thread.
    pub fn join(&mut self) {
        debug_assert!(
            self.id != Some(std::thread::current().id()),
            "Deadlock: the thread is waiting for itself to finish"
        );
        debug_assert!(
            !this_thread::is_interrupted(),
            "The joining thread was interrupted and should be unwinding"
        );
        if let Some(handle) = self.handle.take() {
            if let Err(payload) = handle.join() {
                std::panic::resume_unwind(payload);
            }
        }
    }

    //mp detach
    /// Sever the handle; the thread continues without further control
    pub fn detach(&mut self) {
        self.handle = None;
    }

    //mp interrupt
    /// Raise the cooperative interruption flag; the thread must still
    /// be running
    pub fn interrupt(&self) {
        debug_assert!(
            self.is_alive(),
            "The thread cannot be interrupted, it is not running"
        );
        self.interrupt.raise();
    }

    //mp is_alive
    /// True while the handle owns a joinable thread
    pub fn is_alive(&self) -> bool {
        self.handle.is_some()
    }

    //mp is_interrupted
    /// True once [Thread::interrupt] has been called
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.is_raised()
    }

    //mp id
    /// The identifier of the thread, which must be alive
    pub fn id(&self) -> std::thread::ThreadId {
        debug_assert!(self.is_alive(), "The thread is not running");
        self.id.expect("the thread was never started")
    }

    //mp native_handle
    /// The OS handle of the thread (the pthread on unix), which must
    /// be alive
    pub fn native_handle(&self) -> u64 {
        debug_assert!(self.is_alive(), "The thread is not running");
        self.native
    }

    //mp priority
    /// The scheduling priority of the thread, which must be alive
    pub fn priority(&self) -> ThreadPriority {
        debug_assert!(self.is_alive(), "The thread is not running");
        #[cfg(unix)]
        {
            native::get(self.native as libc::pthread_t)
        }
        #[cfg(not(unix))]
        {
            native::get(self.native)
        }
    }

    //mp set_priority
    /// Change the scheduling priority of the thread, which must be
    /// alive; a platform refusal is logged and ignored
    pub fn set_priority(&self, priority: ThreadPriority) {
        debug_assert!(self.is_alive(), "The thread is not running");
        #[cfg(unix)]
        {
            native::set(self.native as libc::pthread_t, priority);
        }
        #[cfg(not(unix))]
        {
            native::set(self.native, priority);
        }
    }

    //zz All done
}

//ip Drop for Thread
impl Drop for Thread {
    fn drop(&mut self) {
        debug_assert!(
            self.handle.is_none(),
            "The thread handle was destroyed while the thread was still joinable"
        );
    }
}

//ip Display for Thread
impl std::fmt::Display for Thread {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Thread({:x})", self.native)
    }
}
