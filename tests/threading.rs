//a Imports
use gimbal::{
    this_thread, Mutex, RecursiveMutex, ScopedLock, ScopedLockPair, SharedMutex, Thread,
    ThreadPriority, TimeSpan,
};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

//a Mutex tests
#[test]
fn exclusive_mutex_admits_one_thread_at_a_time() {
    const THREADS: u32 = 8;
    const ROUNDS: u32 = 200;

    static MUTEX: Mutex = Mutex::new();
    static INSIDE: AtomicBool = AtomicBool::new(false);
    static OVERLAPPED: AtomicBool = AtomicBool::new(false);
    static TOTAL: AtomicU32 = AtomicU32::new(0);

    let mut workers = Vec::new();
    for _ in 0..THREADS {
        workers.push(Thread::spawn(|| {
            for _ in 0..ROUNDS {
                MUTEX.lock();
                if INSIDE.swap(true, Ordering::SeqCst) {
                    OVERLAPPED.store(true, Ordering::SeqCst);
                }
                TOTAL.fetch_add(1, Ordering::SeqCst);
                this_thread::yield_now();
                INSIDE.store(false, Ordering::SeqCst);
                MUTEX.unlock();
            }
        }));
    }
    for w in workers.iter_mut() {
        w.join();
    }

    assert!(!OVERLAPPED.load(Ordering::SeqCst));
    assert_eq!(TOTAL.load(Ordering::SeqCst), THREADS * ROUNDS);
}

#[test]
fn recursive_mutex_needs_matching_unlocks() {
    static MUTEX: RecursiveMutex = RecursiveMutex::new();
    const DEPTH: usize = 5;

    for _ in 0..DEPTH {
        MUTEX.lock();
    }

    // Still owned by this thread until every level is released
    let mut contender = Thread::spawn(|| {
        assert!(!MUTEX.try_lock());
    });
    contender.join();

    for _ in 0..DEPTH - 1 {
        MUTEX.unlock();
    }
    let mut contender = Thread::spawn(|| {
        assert!(!MUTEX.try_lock());
    });
    contender.join();

    MUTEX.unlock();
    let mut contender = Thread::spawn(|| {
        assert!(MUTEX.try_lock());
        MUTEX.unlock();
    });
    contender.join();
}

#[test]
fn shared_mutex_admits_concurrent_readers() {
    static MUTEX: SharedMutex = SharedMutex::new();
    static READERS: AtomicUsize = AtomicUsize::new(0);
    static SAW_COMPANY: AtomicBool = AtomicBool::new(false);

    let reader = || {
        MUTEX.lock_shared();
        READERS.fetch_add(1, Ordering::SeqCst);
        // Wait to observe the other reader inside the section
        let start = Instant::now();
        while READERS.load(Ordering::SeqCst) < 2 && start.elapsed() < Duration::from_secs(5) {
            this_thread::yield_now();
        }
        if READERS.load(Ordering::SeqCst) >= 2 {
            SAW_COMPANY.store(true, Ordering::SeqCst);
        }
        READERS.fetch_sub(1, Ordering::SeqCst);
        MUTEX.unlock_shared();
    };

    let mut a = Thread::spawn(reader);
    let mut b = Thread::spawn(reader);
    a.join();
    b.join();
    assert!(SAW_COMPANY.load(Ordering::SeqCst));
}

#[test]
fn shared_mutex_writer_excludes_readers() {
    static MUTEX: SharedMutex = SharedMutex::new();

    MUTEX.lock();
    let mut reader = Thread::spawn(|| {
        assert!(!MUTEX.try_lock_shared());
        assert!(!MUTEX.try_lock());
    });
    reader.join();
    MUTEX.unlock();
}

//a Scoped lock tests
#[test]
fn scoped_lock_releases_on_drop() {
    static MUTEX: Mutex = Mutex::new();
    {
        let guard = ScopedLock::new(&MUTEX, true);
        assert!(guard.is_owner());
        let mut contender = Thread::spawn(|| {
            assert!(!MUTEX.try_lock());
        });
        contender.join();
    }
    assert!(MUTEX.try_lock());
    MUTEX.unlock();
}

#[test]
fn scoped_lock_manual_control() {
    static MUTEX: Mutex = Mutex::new();
    let mut guard = ScopedLock::new(&MUTEX, false);
    assert!(!guard.is_owner());
    guard.lock();
    assert!(guard.is_owner());
    guard.unlock();
    assert!(!guard.is_owner());
    assert!(guard.try_lock());
    assert!(guard.is_owner());
}

#[test]
fn scoped_lock_pair_try_takes_both_or_neither() {
    static M1: Mutex = Mutex::new();
    static M2: Mutex = Mutex::new();

    // With the second mutex held elsewhere, try_lock must not keep
    // the first
    M2.lock();
    let mut attempt = Thread::spawn(|| {
        let mut pair = ScopedLockPair::new(&M1, &M2, false);
        assert!(!pair.try_lock());
        assert!(!pair.is_owner());
        // Neither is held by the pair: the first is still free
        assert!(M1.try_lock());
        M1.unlock();
    });
    attempt.join();
    M2.unlock();

    let mut pair = ScopedLockPair::new(&M1, &M2, false);
    assert!(pair.try_lock());
    assert!(pair.is_owner());
    pair.unlock();
}

#[test]
fn scoped_lock_pair_locks_in_any_order() {
    static M1: Mutex = Mutex::new();
    static M2: Mutex = Mutex::new();
    static ROUNDS: AtomicU32 = AtomicU32::new(0);

    // Two threads take the same mutexes in opposite orders; the
    // acquire-or-back-off loop must not deadlock
    let mut forward = Thread::spawn(|| {
        for _ in 0..500 {
            let _pair = ScopedLockPair::new(&M1, &M2, true);
            ROUNDS.fetch_add(1, Ordering::Relaxed);
        }
    });
    let mut backward = Thread::spawn(|| {
        for _ in 0..500 {
            let _pair = ScopedLockPair::new(&M2, &M1, true);
            ROUNDS.fetch_add(1, Ordering::Relaxed);
        }
    });
    forward.join();
    backward.join();
    assert_eq!(ROUNDS.load(Ordering::Relaxed), 1000);
}

//a Thread tests
#[test]
fn spawned_work_completes_before_join_returns() {
    let done = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&done);
    let mut worker = Thread::spawn(move || {
        this_thread::sleep(TimeSpan::from_milliseconds(10));
        flag.store(true, Ordering::SeqCst);
    });
    assert!(worker.is_alive());
    worker.join();
    assert!(done.load(Ordering::SeqCst));
    assert!(!worker.is_alive());
}

#[test]
fn detach_severs_the_handle() {
    let mut worker = Thread::spawn(|| {
        this_thread::sleep(TimeSpan::from_milliseconds(1));
    });
    worker.detach();
    assert!(!worker.is_alive());
}

#[test]
fn display_is_the_hex_id_form() {
    let mut worker = Thread::spawn(|| {});
    let text = format!("{}", worker);
    worker.join();

    let hex = text
        .strip_prefix("Thread(")
        .and_then(|t| t.strip_suffix(')'))
        .expect("Thread(<id-hex>) form");
    assert!(!hex.is_empty());
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));

    let own = this_thread::to_string();
    assert!(own.starts_with("Thread(") && own.ends_with(')'));
}

#[test]
fn interruption_is_cooperative_and_observable() {
    let observed = Arc::new(AtomicBool::new(false));
    let seen = Arc::clone(&observed);
    let mut worker = Thread::spawn(move || {
        // A long sleep that the interruption cuts short
        this_thread::sleep(TimeSpan::new(0, 0, 0, 30, 0, 0, 0));
        seen.store(this_thread::is_interrupted(), Ordering::SeqCst);
    });

    let start = Instant::now();
    std::thread::sleep(Duration::from_millis(20));
    assert!(!worker.is_interrupted());
    worker.interrupt();
    assert!(worker.is_interrupted());
    worker.join();

    assert!(observed.load(Ordering::SeqCst));
    assert!(start.elapsed() < Duration::from_secs(10));
}

#[test]
fn exit_function_runs_exactly_once() {
    static RUNS: AtomicU32 = AtomicU32::new(0);
    let mut worker = Thread::spawn(|| {
        this_thread::set_exit_function(|| {
            RUNS.fetch_add(1, Ordering::SeqCst);
        });
        // Normal work after registration
        this_thread::sleep(TimeSpan::from_milliseconds(1));
    });
    worker.join();
    assert_eq!(RUNS.load(Ordering::SeqCst), 1);
}

#[test]
fn priority_round_trip() {
    let mut worker = Thread::spawn(|| {
        this_thread::sleep(TimeSpan::from_milliseconds(50));
    });

    worker.set_priority(ThreadPriority::High);
    let read = worker.priority();
    if cfg!(target_os = "linux") {
        // SCHED_OTHER has a single priority on Linux, so everything
        // reads back as Normal
        assert_eq!(read, ThreadPriority::Normal);
    }
    worker.join();

    this_thread::set_priority(ThreadPriority::Low);
    let own = this_thread::priority();
    if cfg!(target_os = "linux") {
        assert_eq!(own, ThreadPriority::Normal);
    }
}

#[test]
fn this_thread_identity() {
    assert_eq!(this_thread::id(), std::thread::current().id());

    let main_id = this_thread::id();
    let mut worker = Thread::spawn(move || {
        assert_ne!(this_thread::id(), main_id);
        assert_ne!(this_thread::native_handle(), 0);
    });
    let worker_id = worker.id();
    assert_ne!(worker_id, main_id);
    worker.join();
}

#[test]
fn sleep_lasts_at_least_the_requested_span() {
    let start = Instant::now();
    this_thread::sleep(TimeSpan::from_milliseconds(25));
    assert!(start.elapsed() >= Duration::from_millis(25));
}
