//! Batch-mode statistics aggregation, grounded on the original project's
//! `CompressionInfo`/`StatsOutput` reporting pair.

use std::io;
use std::time::Duration;

/// Per-instance measurements collected after one compress run.
#[derive(Debug, Clone)]
pub struct CompressionInfo {
    pub formula_name: String,
    pub model_name: String,

    pub formula_size: usize,
    pub model_size: usize,
    pub variables_size: usize,
    pub model_file_size: u64,
    pub compression_file_size: u64,
    pub bitvector_size: usize,
    pub diff_encoding_size: usize,
    pub nr_prop_dont_care_vars: usize,
    pub prediction_hit_rate: f64,
    pub parsing_time: Duration,
    pub overall_time: Duration,
}

impl CompressionInfo {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        formula_name: String,
        model_name: String,
        formula_size: usize,
        model_size: usize,
        variables_size: usize,
        model_file_size: u64,
        compression_file_size: u64,
        bitvector_size: usize,
        diff_encoding_size: usize,
        nr_prop_dont_care_vars: usize,
        prediction_hit_rate: f64,
        parsing_time: Duration,
        overall_time: Duration,
    ) -> CompressionInfo {
        CompressionInfo {
            formula_name,
            model_name,
            formula_size,
            model_size,
            variables_size,
            model_file_size,
            compression_file_size,
            bitvector_size,
            diff_encoding_size,
            nr_prop_dont_care_vars,
            prediction_hit_rate,
            parsing_time,
            overall_time,
        }
    }

    /// Ratio of the raw model file to the compressed output; higher is better.
    pub fn compression_ratio_file_size(&self) -> f64 {
        self.model_file_size as f64 / self.compression_file_size as f64
    }

    /// Ratio against a naive packed bitvector (one bit per model variable)
    /// instead of the original file, isolating the codec's gain from the
    /// gain already inherent in not writing one byte per literal.
    pub fn compression_ratio_bitvector(&self) -> f64 {
        let bitvector_file_size = 1 + (self.model_size.saturating_sub(1)) / 8;
        bitvector_file_size as f64 / self.compression_file_size as f64
    }
}

fn mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn geometric_mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let values: Vec<f64> = values.into_iter().filter(|v| *v != 0.0).collect();
    if values.is_empty() {
        return 1.0;
    }
    let exponent = 1.0 / values.len() as f64;
    values.iter().fold(1.0, |acc, v| acc * v.powf(exponent))
}

fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let middle = values.len() / 2;
    if values.len() % 2 != 0 {
        values[middle]
    } else {
        (values[middle - 1] + values[middle]) / 2.0
    }
}

/// Aggregate view over every instance processed during one batch run.
pub struct StatsOutput {
    statistics: Vec<CompressionInfo>,
    avg_model_size: f64,
    avg_model_file_size: f64,
    avg_compressed_size: f64,
    geometric_mean_file_size: f64,
    ratio_median_file_size: f64,
    geometric_mean_bitvector: f64,
    ratio_median_bitvector: f64,
    geometric_mean_hit_rate: f64,
    avg_nr_dont_care_vars: f64,
    avg_parsing_time: Duration,
    avg_overall_time: Duration,
}

impl StatsOutput {
    pub fn new(statistics: Vec<CompressionInfo>) -> StatsOutput {
        let n = statistics.len().max(1) as u32;

        let avg_model_size = mean(statistics.iter().map(|s| s.model_size as f64));
        let avg_model_file_size = mean(statistics.iter().map(|s| s.model_file_size as f64));
        let avg_compressed_size = mean(statistics.iter().map(|s| s.compression_file_size as f64));
        let avg_nr_dont_care_vars = mean(statistics.iter().map(|s| s.nr_prop_dont_care_vars as f64));

        let geometric_mean_file_size = geometric_mean(statistics.iter().map(|s| s.compression_ratio_file_size()));
        let geometric_mean_bitvector = geometric_mean(statistics.iter().map(|s| s.compression_ratio_bitvector()));
        let geometric_mean_hit_rate = geometric_mean(statistics.iter().map(|s| s.prediction_hit_rate));

        let ratio_median_file_size = median(statistics.iter().map(|s| s.compression_ratio_file_size()).collect());
        let ratio_median_bitvector = median(statistics.iter().map(|s| s.compression_ratio_bitvector()).collect());

        let avg_parsing_time = statistics.iter().map(|s| s.parsing_time).sum::<Duration>() / n;
        let avg_overall_time = statistics.iter().map(|s| s.overall_time).sum::<Duration>() / n;

        StatsOutput {
            statistics,
            avg_model_size,
            avg_model_file_size,
            avg_compressed_size,
            geometric_mean_file_size,
            ratio_median_file_size,
            geometric_mean_bitvector,
            ratio_median_bitvector,
            geometric_mean_hit_rate,
            avg_nr_dont_care_vars,
            avg_parsing_time,
            avg_overall_time,
        }
    }

    /// Human-readable table plus summary lines, as printed to stdout.
    pub fn render_table(&self) -> String {
        use std::fmt::Write;
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{:<36}{:<40}{:<10}{:<10}{:<10}{:<10}{:<10}{:<10}{:<10}{:<10}",
            "Instance:", "Model:", "Clauses", "Vars", "Model", "File", "Compr.ratio", "Bitv.ratio", "HitRate", "Exec(ms)"
        );
        for stat in &self.statistics {
            let _ = writeln!(
                out,
                "{:<36}{:<40}{:<10}{:<10}{:<10}{:<10}{:<10.4}{:<10.4}{:<10.4}{:<10}",
                stat.formula_name,
                stat.model_name,
                stat.formula_size,
                stat.variables_size,
                stat.model_size,
                stat.model_file_size,
                stat.compression_ratio_file_size(),
                stat.compression_ratio_bitvector(),
                stat.prediction_hit_rate,
                stat.overall_time.as_millis(),
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Average model size: {}", self.avg_model_size);
        let _ = writeln!(out, "Average model file size: {}", self.avg_model_file_size);
        let _ = writeln!(out, "Average compressed file size: {}", self.avg_compressed_size);
        let _ = writeln!(out, "Geometric mean of compression ratios with file sizes: {}", self.geometric_mean_file_size);
        let _ = writeln!(out, "Median of compression ratio with file sizes: {}", self.ratio_median_file_size);
        let _ = writeln!(out, "Geometric mean of compression ratios compared to a bitvector: {}", self.geometric_mean_bitvector);
        let _ = writeln!(out, "Median of compression ratio compared to a bitvector: {}", self.ratio_median_bitvector);
        let _ = writeln!(out, "Geometric mean of prediction model hit rates: {}", self.geometric_mean_hit_rate);
        let _ = writeln!(out, "Average number of propagated don't care variables: {}", self.avg_nr_dont_care_vars);
        let _ = writeln!(out, "Average parsing time per model: {:?}", self.avg_parsing_time);
        let _ = writeln!(out, "Average execution time per model: {:?}", self.avg_overall_time);
        out
    }

    /// Writes the same data as a CSV file via `writer`.
    pub fn write_csv<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(
            writer,
            "Instance, Model, Clauses count, Variables count, Model variable count, Model file size, \
             Compressed file size, Compression ratio file sizes, Compression ratio bitvector, \
             Prediction model hit rate, Parsing time (us), Execution time (us)"
        )?;
        for stat in &self.statistics {
            writeln!(
                writer,
                "{}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}",
                stat.formula_name,
                stat.model_name,
                stat.formula_size,
                stat.variables_size,
                stat.model_size,
                stat.model_file_size,
                stat.compression_file_size,
                stat.compression_ratio_file_size(),
                stat.compression_ratio_bitvector(),
                stat.prediction_hit_rate,
                stat.parsing_time.as_micros(),
                stat.overall_time.as_micros(),
            )?;
        }
        writeln!(
            writer,
            "\nAverage model file size:, {}\nAverage compressed file size:, {}\n\
             Geometric mean of compression ratios with file sizes:, {}\n\
             Median of compression ratio with file sizes:, {}\n\
             Geometric mean of compression ratios compared to a bitvector:, {}\n\
             Median of compression ratio compared to a bitvector:, {}\n\
             Geometric mean of prediction model hit rates:, {}\n\
             Number of propagated don't care variables:, {}\n\
             Average parsing time per model (us):, {}\n\
             Average execution time per model (us):, {}",
            self.avg_model_file_size,
            self.avg_compressed_size,
            self.geometric_mean_file_size,
            self.ratio_median_file_size,
            self.geometric_mean_bitvector,
            self.ratio_median_bitvector,
            self.geometric_mean_hit_rate,
            self.avg_nr_dont_care_vars,
            self.avg_parsing_time.as_micros(),
            self.avg_overall_time.as_micros(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(model_file_size: u64, compression_file_size: u64, hit_rate: f64) -> CompressionInfo {
        CompressionInfo::new(
            "f".to_string(),
            "m".to_string(),
            10,
            5,
            5,
            model_file_size,
            compression_file_size,
            5,
            3,
            1,
            hit_rate,
            Duration::from_micros(10),
            Duration::from_micros(100),
        )
    }

    #[test]
    fn compression_ratios_match_formula() {
        let info = sample(100, 25, 0.8);
        assert_eq!(info.compression_ratio_file_size(), 4.0);
    }

    #[test]
    fn stats_output_averages_nonempty_batch() {
        let stats = StatsOutput::new(vec![sample(100, 25, 0.8), sample(200, 50, 0.6)]);
        assert_eq!(stats.avg_model_file_size, 150.0);
        assert!(stats.render_table().contains("Average model size"));
    }
}
