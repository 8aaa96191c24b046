use super::*;
use crate::analyze::local::LocalAnalyzer;
use crate::foundation::error::PosterError;

struct Failing;

impl Analyzer for Failing {
    fn analyze(&self, _city: &str, _memory: &str) -> PosterResult<DesignParameters> {
        Err(PosterError::render("service unavailable"))
    }
}

struct Fixed;

impl Analyzer for Fixed {
    fn analyze(&self, _city: &str, _memory: &str) -> PosterResult<DesignParameters> {
        Ok(DesignParameters {
            title: "fixed".to_string(),
            ..DesignParameters::default()
        })
    }
}

#[test]
fn primary_result_is_used_when_it_succeeds() {
    let a = FallbackAnalyzer::new(Fixed, LocalAnalyzer);
    assert_eq!(a.analyze("Rome", "bridges").unwrap().title, "fixed");
}

#[test]
fn failure_routes_to_fallback() {
    let a = FallbackAnalyzer::new(Failing, LocalAnalyzer);
    let p = a.analyze("Rome", "bridges").unwrap();
    assert_eq!(p.title, "Memory of Rome");
}

#[test]
fn both_failing_returns_the_fallback_error() {
    let a = FallbackAnalyzer::new(Failing, Failing);
    let err = a.analyze("Rome", "bridges").unwrap_err();
    assert!(err.to_string().contains("service unavailable"));
}

#[test]
fn boxed_trait_objects_chain() {
    let primary: Box<dyn Analyzer> = Box::new(Failing);
    let a = FallbackAnalyzer::new(primary, &LocalAnalyzer);
    assert!(a.analyze("Rome", "bridges").is_ok());
}
