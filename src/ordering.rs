//! Due-date ordering for the task list.

use crate::model::{Date, Task};

/// True when `a` is not later than `b` (month first, then day).
pub fn compare(a: &Date, b: &Date) -> bool {
    a.month < b.month || (a.month == b.month && a.day <= b.day)
}

/// Insertion sort by due date, in place.
///
/// The comparison is non-strict, so a task walks past every earlier
/// neighbour that shares its due date: equal dates come out in reverse
/// of their input order.
pub fn sort_by_due_date(tasks: &mut [Task]) {
    for i in 0..tasks.len() {
        let mut j = i;
        while j > 0 && compare(&tasks[j].due, &tasks[j - 1].due) {
            tasks.swap(j, j - 1);
            j -= 1;
        }
    }
}
