use clap::Args;
use local_pros::config::AppConfig;
use local_pros::content::{self, ServiceListing};
use local_pros::error::AppError;
use local_pros::forms::{validate_postcode, ValidationError};

#[derive(Args, Debug, Default)]
pub(crate) struct ServicesArgs {
    /// Print the full cost guide for one service instead of the catalogue
    #[arg(long)]
    pub(crate) id: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct PostcodeArgs {
    /// Postcode to check, e.g. "HP13 1AB"
    pub(crate) value: String,
    /// Region prefix to check against (defaults to the configured one)
    #[arg(long)]
    pub(crate) region: Option<String>,
}

pub(crate) fn run_service_report(args: ServicesArgs) -> Result<(), AppError> {
    match args.id.as_deref() {
        Some(id) => match content::lookup(id) {
            Some(listing) => print!("{}", render_guide(&listing)),
            None => {
                println!("Unknown service '{id}'. Known services:");
                print!("{}", render_catalogue());
            }
        },
        None => print!("{}", render_catalogue()),
    }
    Ok(())
}

pub(crate) fn run_postcode_check(args: PostcodeArgs) -> Result<(), AppError> {
    let region = match args.region {
        Some(region) => region.trim().to_ascii_uppercase(),
        None => AppConfig::load()?.forms.region_prefix,
    };
    println!("{}", describe_postcode(&args.value, &region));
    Ok(())
}

fn render_catalogue() -> String {
    let mut out = String::from("Popular services\n");
    for service in content::popular_services() {
        out.push_str(&format!(
            "- {:<12} {}: {}\n",
            service.id, service.title, service.description
        ));
    }
    out.push_str("Other services\n");
    for service in content::other_services() {
        out.push_str(&format!(
            "- {:<12} {}: {}\n",
            service.id, service.title, service.description
        ));
    }
    out
}

fn render_guide(listing: &ServiceListing) -> String {
    let guide = listing.guide;
    let mut out = format!("{}\n", guide.hero_title);
    out.push_str(&format!("Typical cost: {}\n", guide.cost_range));
    out.push_str(&format!("{}\n", guide.cost_description));

    out.push_str("Price factors\n");
    for factor in guide.factors {
        out.push_str(&format!("- {factor}\n"));
    }

    if listing.subtypes.is_empty() {
        out.push_str(&format!(
            "Job types: General {} Request\n",
            listing.service_name()
        ));
    } else {
        out.push_str("Job types\n");
        for subtype in listing.subtypes {
            out.push_str(&format!("- {subtype}\n"));
        }
    }

    if !guide.faqs.is_empty() {
        out.push_str("FAQs\n");
        for faq in guide.faqs {
            out.push_str(&format!("Q: {}\nA: {}\n", faq.question, faq.answer));
        }
    }
    out
}

fn describe_postcode(raw: &str, region: &str) -> String {
    let shown = raw.trim().to_uppercase();
    match validate_postcode(raw, region) {
        Ok(()) => format!("{shown}: serviceable"),
        Err(ValidationError::PostcodeRequired) => "no postcode given".to_string(),
        Err(err) => format!("{shown}: not serviceable ({err})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_lists_every_service() {
        let out = render_catalogue();
        for service in content::all_services() {
            assert!(out.contains(service.title), "missing {}", service.id);
        }
        assert!(out.find("Popular services") < out.find("Other services"));
    }

    #[test]
    fn guide_includes_costs_and_job_types() {
        let listing = content::lookup("plumbing").expect("plumbing listing");
        let out = render_guide(&listing);
        assert!(out.contains(listing.guide.cost_range));
        assert!(out.contains("Emergency Plumbing / Leak"));
    }

    #[test]
    fn postcode_report_explains_rejections() {
        assert_eq!(describe_postcode("hp13 1ab", "HP"), "HP13 1AB: serviceable");
        assert_eq!(
            describe_postcode("SL1 2AB", "HP"),
            "SL1 2AB: not serviceable (We currently only serve HP postcodes)"
        );
        assert_eq!(describe_postcode("  ", "HP"), "no postcode given");
    }
}
