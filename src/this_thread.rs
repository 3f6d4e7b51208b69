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

@file    this_thread.rs
@brief   Operations on the currently executing thread
 */

//a Documentation
/*!
Operations that refer to the calling thread: yielding, sleeping,
identity, the cooperative interruption flag, the exit hook and the
scheduling priority.

[sleep] is an interruption point: it wakes early when the thread's
interruption flag is raised. Nothing else here blocks.
!*/

//a Imports
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::thread::{native, ThreadPriority};
use crate::time_span::TimeSpan;

//a InterruptFlag
//tp InterruptFlag
/// The cooperative interruption flag shared between a
/// [Thread](crate::Thread) handle and the thread it controls
pub(crate) struct InterruptFlag {
    raised: AtomicBool,
}

//ip InterruptFlag
impl InterruptFlag {
    pub(crate) fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }
    pub(crate) fn raise(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }
    pub(crate) fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }
}

//a Thread-local state
struct ExitFunction(Option<Box<dyn FnOnce()>>);

//ip Drop for ExitFunction
impl Drop for ExitFunction {
    fn drop(&mut self) {
        // Run at normal thread exit only; an unwinding thread does
        // not count as exiting normally
        if !std::thread::panicking() {
            if let Some(hook) = self.0.take() {
                hook();
            }
        }
    }
}

thread_local! {
    static INTERRUPT: RefCell<Option<Arc<InterruptFlag>>> = const { RefCell::new(None) };
    static EXIT_FUNCTION: RefCell<Option<ExitFunction>> = const { RefCell::new(None) };
}

//fi adopt_interrupt_flag
/// Install the flag a [Thread](crate::Thread) handle shares with this
/// thread; called once at the top of every spawned thread
pub(crate) fn adopt_interrupt_flag(flag: Arc<InterruptFlag>) {
    INTERRUPT.with(|slot| *slot.borrow_mut() = Some(flag));
}

//fi with_interrupt_flag
/// Read through this thread's flag, giving threads the library did
/// not start a lazily created one
fn with_interrupt_flag<R>(read: impl FnOnce(&InterruptFlag) -> R) -> R {
    INTERRUPT.with(|slot| {
        let mut slot = slot.borrow_mut();
        let flag = slot.get_or_insert_with(|| Arc::new(InterruptFlag::new()));
        read(flag)
    })
}

//a Operations
//fp yield_now
/// Cooperatively give up the rest of this thread's time slice
pub fn yield_now() {
    std::thread::yield_now();
}

//fp sleep
/// Suspend this thread for at least the given duration
///
/// This is an interruption point: the sleep is carved into short
/// slices and ends early once the thread's interruption flag is
/// raised. The caller is expected to notice via [is_interrupted] and
/// unwind.
pub fn sleep(duration: TimeSpan) {
    const SLICE: Duration = Duration::from_millis(2);
    match Instant::now().checked_add(duration.to_duration()) {
        Some(deadline) => {
            while !is_interrupted() {
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                std::thread::sleep((deadline - now).min(SLICE));
            }
        }
        None => {
            // A deadline beyond what the clock can represent: sleep
            // until interrupted
            while !is_interrupted() {
                std::thread::sleep(SLICE);
            }
        }
    }
}

//fp id
/// The identifier of this thread
pub fn id() -> std::thread::ThreadId {
    std::thread::current().id()
}

//fp native_handle
/// The OS handle of this thread (the pthread on unix)
pub fn native_handle() -> u64 {
    #[cfg(unix)]
    {
        unsafe { libc::pthread_self() as u64 }
    }
    #[cfg(not(unix))]
    {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        id().hash(&mut hasher);
        hasher.finish()
    }
}

//fp is_interrupted
/// True once this thread has been interrupted through its
/// [Thread](crate::Thread) handle
///
/// Interruption is advisory: user code must poll this at its own
/// checkpoints, and the library checks it at its own suspension
/// points.
pub fn is_interrupted() -> bool {
    with_interrupt_flag(|flag| flag.is_raised())
}

//fp set_exit_function
/// Register a callable invoked exactly once when this thread exits
/// normally
///
/// A later registration replaces an earlier one. The hook does not run
/// when the thread unwinds from a panic.
pub fn set_exit_function<W>(hook: W)
where
    W: FnOnce() + 'static,
{
    EXIT_FUNCTION.with(|slot| {
        *slot.borrow_mut() = Some(ExitFunction(Some(Box::new(hook))));
    });
}

//fp priority
/// The scheduling priority of this thread
pub fn priority() -> ThreadPriority {
    #[cfg(unix)]
    {
        native::get(unsafe { libc::pthread_self() })
    }
    #[cfg(not(unix))]
    {
        native::get(native_handle())
    }
}

//fp set_priority
/// Change the scheduling priority of this thread; a platform refusal
/// is logged and ignored
pub fn set_priority(priority: ThreadPriority) {
    #[cfg(unix)]
    {
        native::set(unsafe { libc::pthread_self() }, priority);
    }
    #[cfg(not(unix))]
    {
        native::set(native_handle(), priority);
    }
}

//fp to_string
/// This thread rendered the same way a [Thread](crate::Thread) handle
/// renders: `Thread(<id-hex>)`
pub fn to_string() -> String {
    format!("Thread({:x})", native_handle())
}
