/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Settings that determine which points on a line are corners
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CornersInput {
    /// Distance between consecutive points that are tested
    pub t_step: f64,

    /// Approximate minimum angle (in degrees) for a point to be considered a corner
    pub inner_min_angle_in_deg: f64,

    /// Maximum angle difference (in degrees) between two points on either arm of a corner
    pub outer_max_angle_in_deg: f64,

    /// Number of positive tests in a row needed before a corner is accepted (reduces false positives, but large values
    /// will miss sharp corners)
    ///
    /// This is compared to the length of the series along the line rather than to the number of steps, so the two only
    /// agree when `t_step` is 1.
    pub min_number_test_positives_in_series: u32,

    /// Corners closer together than this are merged into one
    pub max_dist_between_corners_to_merge: u32,

    /// Scales the distance between the two measurements either side of the center of a corner
    pub inner_inter_measurement_factor: f64,

    /// Scales the distance between the inner and outer measurements on each arm of a corner
    pub outer_inter_measurement_factor: f64,
}

///
/// Settings that determine whether or not a section of a line is a straight segment
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentsInput {
    /// Distance between the points used to measure the error
    pub t_step: f64,

    /// Maximum mean error for a segment of the reference length. Longer segments are allowed proportionally more
    /// squared error.
    pub max_mean_error_at_reference_length: f64,

    /// Length of segment that `max_mean_error_at_reference_length` applies to
    pub reference_segment_length: f64,
}

///
/// Settings that control how sections of a line are converted into biarcs
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BiarcsInput {
    /// Distance between the points on the line that are considered as biarc end points (and that are used to measure
    /// the error)
    pub t_step: f64,

    /// Maximum mean squared error allowed for any biarc
    pub max_mean_error: f64,

    /// Largest ratio of the lengths of the two arcs that is tried when fitting a biarc
    pub max_biarc_ratio: f64,

    /// Smallest ratio of the lengths of the two arcs that is tried when fitting a biarc
    pub min_biarc_ratio: f64,

    /// Number of arc length ratios to try (preferably an odd number so that 1.0 is included)
    pub num_biarc_ratio_samples: u32,

    /// A longer biarc is only preferred over a shorter one if its error is no more than this many times the error of
    /// the shorter one. 1.0 prefers biarcs that don't increase the error at all.
    pub dist_to_error_threshold: f64,

    /// `dist_to_error_threshold` is not used for biarcs that end within this many steps of the end of the section
    pub end_of_line_okay_factor: f64,

    /// Allows the last biarc of a section to be a single arc, which avoids short arcs at the end of a section
    pub allow_half_arc_at_section_end: bool,

    /// Approximate tolerance (in degrees) for the tangent error at the end of a section ending in a single arc
    pub end_angle_tolerance: f64,

    /// Allows `end_angle_tolerance_for_single_arc_section` when an entire section can be fitted with a single arc
    pub allow_extra_tolerance_for_single_arc_sections: bool,

    /// Tolerance (in degrees) for the tangent error at the end of a section that's fitted with a single arc
    pub end_angle_tolerance_for_single_arc_section: f64,

    /// Biarcs whose mid-point is further than this from the line are rejected
    pub max_dist_to_mid_point: f64,
}

///
/// All of the settings used to generate an arc spline
///
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingInput {
    pub corners: CornersInput,
    pub segments: SegmentsInput,
    pub biarcs: BiarcsInput,
}

impl Default for CornersInput {
    fn default() -> CornersInput {
        CornersInput {
            t_step: 1.0,
            inner_min_angle_in_deg: 45.0,
            outer_max_angle_in_deg: 25.0,
            min_number_test_positives_in_series: 2,
            max_dist_between_corners_to_merge: 4,
            inner_inter_measurement_factor: 1.0,
            outer_inter_measurement_factor: 2.0,
        }
    }
}

impl Default for SegmentsInput {
    fn default() -> SegmentsInput {
        SegmentsInput {
            t_step: 15.0,
            max_mean_error_at_reference_length: 2.5,
            reference_segment_length: 20.0,
        }
    }
}

impl Default for BiarcsInput {
    fn default() -> BiarcsInput {
        let max_biarc_ratio = 5.0;

        BiarcsInput {
            t_step: 15.0,
            max_mean_error: 10.0,
            max_biarc_ratio,
            min_biarc_ratio: 1.0 / max_biarc_ratio,
            num_biarc_ratio_samples: 9,
            dist_to_error_threshold: 1.01,
            end_of_line_okay_factor: 0.0,
            allow_half_arc_at_section_end: true,
            end_angle_tolerance: 15.0,
            allow_extra_tolerance_for_single_arc_sections: false,
            end_angle_tolerance_for_single_arc_section: 45.0,
            max_dist_to_mid_point: 5.0,
        }
    }
}

impl ProcessingInput {
    ///
    /// Panics if these settings could never be used to generate a spline
    ///
    pub fn check(&self) {
        assert!(self.corners.t_step > 0.0, "Corner step must be positive");
        assert!(self.segments.t_step > 0.0, "Segment step must be positive");
        assert!(self.segments.reference_segment_length > 0.0, "Reference segment length must be positive");
        assert!(self.biarcs.t_step > 0.0, "Biarc step must be positive");
        assert!(self.biarcs.min_biarc_ratio > 0.0, "Biarc ratios must be positive");
        assert!(self.biarcs.min_biarc_ratio <= self.biarcs.max_biarc_ratio, "Minimum biarc ratio is larger than the maximum");
        assert!(self.biarcs.num_biarc_ratio_samples > 0, "At least one biarc ratio must be tried");
    }
}
