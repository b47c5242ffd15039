//! Fixed dashboard text.

pub const TITLE: &str = "Influenza-Like Illness (ILI) Over Time";
pub const SELECT_LABEL: &str = "Select a state";

pub const WEEKS_AXIS: &str = "Weeks Since Start";
pub const ILI_AXIS: &str = "ILI (%)";
pub const DENSITY_AXIS: &str = "Density";
pub const HISTOGRAM_LEGEND: &str = "ILI Histogram";

pub const DESCRIPTIONS_HEADER: &str = "Plot Descriptions";
pub const TIME_SERIES_HEADING: &str = "1. ILI Percentage Over Time";
pub const DISTRIBUTION_HEADING: &str = "2. Histogram of ILI (%) and Exponential Fit";

pub const TIME_SERIES_TEXT: &str = "\
The line plot above shows how the percentage of outpatient visits related to \
Influenza-Like Illness (ILI) changes over time for the selected state. Each point \
represents a weekly observation, starting from week 0 (the beginning of the dataset). \
The y-axis shows what percentage of visits were due to ILI that week.

This longitudinal visualization helps identify patterns in flu-like illness, such as \
seasonal spikes, long-term trends, or abnormal activity. Consistent with public health \
patterns, many states display clear seasonal cycles, with peaks in colder months. This \
visual representation aligns with the Law of Large Numbers (LLN), which tells us that \
the more data we collect, the closer our average gets to the true value.";

pub const DISTRIBUTION_TEXT: &str = "\
The histogram shows how frequently different ILI percentages occurred. The blue bars \
represent how often we saw low, medium, or high flu activity across all weeks.

Overlaid on the histogram is a red curve representing an exponential distribution fit. \
To build this curve, we estimated the rate parameter λ using the Law of Large Numbers, \
where we took the average ILI percentage and used λ̂ = 1/ȳ (where ȳ is the ILI mean). \
This density curve lets us compare how well the exponential model approximates the \
observed ILI data.

This comparison allows us to understand how real-world epidemiological data may follow \
(or deviate from) statistical theory and its distributions. If the red curve matches the \
shape of the histogram, it suggests that the exponential model is a good fit for this data.";

pub const NO_DATA: &str = "No data available for this state.";

/// Heading of the distribution chart.
pub fn histogram_title(state: &str) -> String {
    format!("Influenza-Like Illness (ILI) Percent Distribution for {}", state)
}

/// Legend entry of the fitted density, λ̂ to two decimals.
pub fn fit_legend(lambda: f64) -> String {
    format!("Exponential Fit (λ̂ = {:.2})", lambda)
}

/// Message shown in place of the fit when λ̂ is undefined.
pub fn cannot_fit(reason: &impl std::fmt::Display) -> String {
    format!("Cannot fit exponential model: {}", reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolated_text() {
        assert_eq!(
            histogram_title("Texas"),
            "Influenza-Like Illness (ILI) Percent Distribution for Texas"
        );
        assert_eq!(fit_legend(0.5), "Exponential Fit (λ̂ = 0.50)");
        assert_eq!(fit_legend(0.4567), "Exponential Fit (λ̂ = 0.46)");
    }
}
