//! Cancellable periodic tasks on a virtual clock
//!
//! The frame loop and the spawn timer are each a one-shot deadline that the
//! owner re-arms after running. Neither has a cancel handle: a task that is not
//! re-armed (because the game is over) simply stops.

/// A one-shot deadline in milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodicTask {
    due_ms: Option<f64>,
}

impl PeriodicTask {
    pub fn new() -> Self {
        Self { due_ms: None }
    }

    /// Fire `delay_ms` after `now_ms`
    pub fn arm(&mut self, now_ms: f64, delay_ms: f64) {
        self.due_ms = Some(now_ms + delay_ms);
    }

    pub fn disarm(&mut self) {
        self.due_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn due_ms(&self) -> Option<f64> {
        self.due_ms
    }
}

/// Which task came due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Frame,
    Spawn,
}

/// Single-threaded event queue holding the frame and spawn tasks
#[derive(Debug, Clone)]
pub struct Schedule {
    now_ms: f64,
    frame_interval_ms: f64,
    frame: PeriodicTask,
    spawn: PeriodicTask,
}

impl Schedule {
    pub fn new(frame_interval_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            frame_interval_ms,
            frame: PeriodicTask::new(),
            spawn: PeriodicTask::new(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Run the frame task one frame interval from now
    pub fn request_frame(&mut self) {
        self.frame.arm(self.now_ms, self.frame_interval_ms);
    }

    /// Run the spawn task `delay_ms` from now
    pub fn spawn_after(&mut self, delay_ms: u32) {
        self.spawn.arm(self.now_ms, f64::from(delay_ms));
    }

    /// Run the spawn task right away (at the current time)
    pub fn spawn_now(&mut self) {
        self.spawn.arm(self.now_ms, 0.0);
    }

    pub fn is_idle(&self) -> bool {
        !self.frame.is_armed() && !self.spawn.is_armed()
    }

    /// Pop the earliest due task and advance the clock to it
    ///
    /// The popped task is disarmed; its owner re-arms it if it should keep
    /// running. Frames win ties. `None` once both tasks have stopped.
    pub fn next(&mut self) -> Option<Task> {
        let task = match (self.frame.due_ms(), self.spawn.due_ms()) {
            (None, None) => return None,
            (Some(_), None) => Task::Frame,
            (None, Some(_)) => Task::Spawn,
            (Some(f), Some(s)) => {
                if f <= s {
                    Task::Frame
                } else {
                    Task::Spawn
                }
            }
        };
        let slot = match task {
            Task::Frame => &mut self.frame,
            Task::Spawn => &mut self.spawn,
        };
        if let Some(due) = slot.due_ms() {
            self.now_ms = self.now_ms.max(due);
        }
        slot.disarm();
        Some(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_schedule_is_idle() {
        let mut schedule = Schedule::new(16.0);
        assert!(schedule.is_idle());
        assert_eq!(schedule.next(), None);
    }

    #[test]
    fn test_tasks_run_in_time_order() {
        let mut schedule = Schedule::new(16.0);
        schedule.request_frame();
        schedule.spawn_after(40);

        assert_eq!(schedule.next(), Some(Task::Frame));
        assert_eq!(schedule.now_ms(), 16.0);
        schedule.request_frame();
        assert_eq!(schedule.next(), Some(Task::Frame));
        assert_eq!(schedule.now_ms(), 32.0);
        schedule.request_frame();
        assert_eq!(schedule.next(), Some(Task::Spawn));
        assert_eq!(schedule.now_ms(), 40.0);
        assert_eq!(schedule.next(), Some(Task::Frame));
        assert_eq!(schedule.now_ms(), 48.0);
    }

    #[test]
    fn test_frame_wins_ties() {
        let mut schedule = Schedule::new(10.0);
        schedule.spawn_after(10);
        schedule.request_frame();
        assert_eq!(schedule.next(), Some(Task::Frame));
        assert_eq!(schedule.next(), Some(Task::Spawn));
        assert_eq!(schedule.now_ms(), 10.0);
    }

    #[test]
    fn test_not_rearmed_means_stopped() {
        let mut schedule = Schedule::new(16.0);
        schedule.spawn_now();
        assert_eq!(schedule.next(), Some(Task::Spawn));
        assert_eq!(schedule.now_ms(), 0.0);
        assert!(schedule.is_idle());
        assert_eq!(schedule.next(), None);
    }

    #[test]
    fn test_periodic_task_arm_disarm() {
        let mut task = PeriodicTask::new();
        assert!(!task.is_armed());
        task.arm(100.0, 25.0);
        assert_eq!(task.due_ms(), Some(125.0));
        task.disarm();
        assert!(!task.is_armed());
    }
}
