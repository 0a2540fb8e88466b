//! Column-packing layout.
//!
//! Double-booked appointments render side by side: overlapping appointments
//! are grouped into clusters, each cluster is packed into lanes
//! (sub-columns), and every member of a cluster shares the cluster's lane
//! count so a busy stretch reads as a uniform grid.
//!
//! The assignment is derived from the current appointment list on every call
//! and is never cached; feeding the same set twice yields the same layout.

use std::collections::HashMap;

use crate::layout::overlap::overlaps;
use crate::models::appointment::Appointment;

/// Lane placement for one appointment, valid only within the cluster it was
/// computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneAssignment {
    /// Sub-column index within the cluster
    pub index: usize,
    /// Total sub-columns in the cluster
    pub count: usize,
}

impl LaneAssignment {
    /// Left edge as a fraction of the column width.
    pub fn left(&self) -> f32 {
        self.index as f32 / self.count as f32
    }

    /// Width as a fraction of the column width.
    pub fn width(&self) -> f32 {
        1.0 / self.count as f32
    }
}

/// Compute lane assignments for all appointments of one column (one stylist
/// and date).
///
/// The packing order is start minute ascending, longer appointments first on
/// equal starts, then id; the id tiebreak makes the result identical for any
/// input ordering of the same set.
pub fn column_layout(appointments: &[&Appointment]) -> HashMap<String, LaneAssignment> {
    let mut sorted: Vec<&Appointment> = appointments.to_vec();
    sorted.sort_by(|a, b| {
        a.start_minutes()
            .cmp(&b.start_minutes())
            .then_with(|| b.duration_minutes.cmp(&a.duration_minutes))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut assignments = HashMap::new();
    for cluster in form_clusters(&sorted) {
        pack_cluster(&cluster, &mut assignments);
    }
    assignments
}

/// Scan the sorted list and group it into clusters: an appointment joins the
/// open cluster when it overlaps any member already in it, otherwise the
/// cluster is flushed and a new one starts. Because the input is sorted by
/// start, this matches the transitive overlap closure.
fn form_clusters<'a>(sorted: &[&'a Appointment]) -> Vec<Vec<&'a Appointment>> {
    let mut clusters: Vec<Vec<&Appointment>> = Vec::new();
    let mut current: Vec<&Appointment> = Vec::new();

    for &appointment in sorted {
        if current.is_empty() || current.iter().any(|member| overlaps(member, appointment)) {
            current.push(appointment);
        } else {
            clusters.push(std::mem::take(&mut current));
            current.push(appointment);
        }
    }
    if !current.is_empty() {
        clusters.push(current);
    }

    clusters
}

/// First-fit lane packing within one cluster: each appointment lands in the
/// first lane none of whose occupants overlap it, opening a new lane when
/// none qualifies. All members share the cluster's final lane count.
fn pack_cluster(cluster: &[&Appointment], assignments: &mut HashMap<String, LaneAssignment>) {
    let mut lanes: Vec<Vec<&Appointment>> = Vec::new();
    let mut placed: Vec<(&str, usize)> = Vec::with_capacity(cluster.len());

    for &appointment in cluster {
        let lane_index = lanes
            .iter()
            .position(|lane| lane.iter().all(|occupant| !overlaps(occupant, appointment)));
        match lane_index {
            Some(index) => {
                lanes[index].push(appointment);
                placed.push((appointment.id.as_str(), index));
            }
            None => {
                lanes.push(vec![appointment]);
                placed.push((appointment.id.as_str(), lanes.len() - 1));
            }
        }
    }

    let count = lanes.len();
    for (id, index) in placed {
        assignments.insert(id.to_string(), LaneAssignment { index, count });
    }
}
