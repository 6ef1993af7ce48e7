use crate::domain::map::Marker;
use crate::domain::record::Status;
use crate::domain::status_style::classify;
use maud::{html, Markup};

/// Placeholder map: markers sit at arbitrary positions, coloured by status.
pub fn complaint_map(markers: &[Marker<'_>]) -> Markup {
    html! {
        div class="complaint-map relative w-full h-[600px] bg-gray-100 overflow-hidden" {
            @for marker in markers {
                @let status = marker.record.status_label().unwrap_or("Unknown");
                @let colour = classify(status).marker_class();
                div class="marker group absolute -translate-x-1/2 -translate-y-1/2 z-10"
                    style={ "left: " (format!("{:.1}", marker.left_pct)) "%; top: " (format!("{:.1}", marker.top_pct)) "%" }
                    title=(marker.record.title)
                {
                    div class={ "w-6 h-6 rounded-full text-white flex items-center justify-center " (colour) } { "•" }
                    div class="hidden group-hover:block absolute bottom-full mb-2 w-64 p-2 bg-white rounded-md shadow-lg z-20" {
                        div class="text-sm font-medium" { (marker.record.title) }
                        div class="text-xs text-gray-500 mt-1" { (marker.record.location) }
                        div class="flex justify-between items-center mt-2" {
                            span class={ "text-xs px-2 py-0.5 rounded-full text-white " (colour) } { (status) }
                            span class="text-xs text-gray-500" { (marker.record.date.format("%d/%m/%Y")) }
                        }
                    }
                }
            }

            div class="absolute bottom-4 right-4 bg-white p-3 rounded-md shadow-md z-20" {
                div class="text-sm font-medium mb-2" { "Status Legend" }
                div class="space-y-2" {
                    @for status in [Status::Resolved, Status::UnderInvestigation, Status::Pending] {
                        div class="flex items-center" {
                            div class={ "w-3 h-3 rounded-full mr-2 " (classify(status.label()).marker_class()) } {}
                            span class="text-xs" { (status.label()) }
                        }
                    }
                }
            }
        }
    }
}
