//! Typed employee profile matching the prediction service's request model.

use serde::{Deserialize, Serialize};

use super::form::FormState;
use crate::buckets::{AgeGroup, SalarySlab};

/// The full set of directly-set inputs the predictor expects.
///
/// Wire names are PascalCase. The two derived categoricals (`AgeGroup`,
/// `SalarySlab`) are deliberately absent: they are recomputed from `Age`
/// and `MonthlyIncome` every time a form snapshot is taken, so they can
/// never drift from their sources. Unknown keys in incoming JSON (including
/// stale derived fields) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeProfile {
    pub age: i64,
    pub business_travel: String,
    pub daily_rate: i64,
    pub department: String,
    pub distance_from_home: i64,
    pub education: i64,
    pub education_field: String,
    pub environment_satisfaction: i64,
    pub gender: String,
    pub hourly_rate: i64,
    pub job_involvement: i64,
    pub job_level: i64,
    pub job_role: String,
    pub job_satisfaction: i64,
    pub marital_status: String,
    pub monthly_income: i64,
    pub monthly_rate: i64,
    pub num_companies_worked: i64,
    pub over_time: String,
    pub percent_salary_hike: i64,
    pub performance_rating: i64,
    pub relationship_satisfaction: i64,
    pub stock_option_level: i64,
    pub total_working_years: i64,
    pub training_times_last_year: i64,
    pub work_life_balance: i64,
    pub years_at_company: i64,
    pub years_in_current_role: i64,
    pub years_since_last_promotion: i64,
    pub years_with_curr_manager: i64,
}

impl EmployeeProfile {
    /// Age bucket derived from the current `age`.
    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::from_age(self.age)
    }

    /// Salary bucket derived from the current `monthly_income`.
    pub fn salary_slab(&self) -> SalarySlab {
        SalarySlab::from_monthly_income(self.monthly_income)
    }

    /// Take a flat form snapshot for submission.
    ///
    /// The derived buckets are injected here, consistent with the numeric
    /// sources at this instant.
    pub fn to_form(&self) -> FormState {
        let mut form = FormState::new();
        form.set_int("Age", self.age)
            .set_text("AgeGroup", self.age_group().as_str())
            .set_text("BusinessTravel", &self.business_travel)
            .set_int("DailyRate", self.daily_rate)
            .set_text("Department", &self.department)
            .set_int("DistanceFromHome", self.distance_from_home)
            .set_int("Education", self.education)
            .set_text("EducationField", &self.education_field)
            .set_int("EnvironmentSatisfaction", self.environment_satisfaction)
            .set_text("Gender", &self.gender)
            .set_int("HourlyRate", self.hourly_rate)
            .set_int("JobInvolvement", self.job_involvement)
            .set_int("JobLevel", self.job_level)
            .set_text("JobRole", &self.job_role)
            .set_int("JobSatisfaction", self.job_satisfaction)
            .set_text("MaritalStatus", &self.marital_status)
            .set_int("MonthlyIncome", self.monthly_income)
            .set_text("SalarySlab", self.salary_slab().as_str())
            .set_int("MonthlyRate", self.monthly_rate)
            .set_int("NumCompaniesWorked", self.num_companies_worked)
            .set_text("OverTime", &self.over_time)
            .set_int("PercentSalaryHike", self.percent_salary_hike)
            .set_int("PerformanceRating", self.performance_rating)
            .set_int("RelationshipSatisfaction", self.relationship_satisfaction)
            .set_int("StockOptionLevel", self.stock_option_level)
            .set_int("TotalWorkingYears", self.total_working_years)
            .set_int("TrainingTimesLastYear", self.training_times_last_year)
            .set_int("WorkLifeBalance", self.work_life_balance)
            .set_int("YearsAtCompany", self.years_at_company)
            .set_int("YearsInCurrentRole", self.years_in_current_role)
            .set_int("YearsSinceLastPromotion", self.years_since_last_promotion)
            .set_int("YearsWithCurrManager", self.years_with_curr_manager);
        form
    }
}

impl Default for EmployeeProfile {
    /// The service UI's slider defaults and the first option of each
    /// categorical selector.
    fn default() -> Self {
        Self {
            age: 30,
            business_travel: "Non-Travel".to_string(),
            daily_rate: 800,
            department: "Human Resources".to_string(),
            distance_from_home: 10,
            education: 3,
            education_field: "Human Resources".to_string(),
            environment_satisfaction: 3,
            gender: "Female".to_string(),
            hourly_rate: 65,
            job_involvement: 3,
            job_level: 2,
            job_role: "Healthcare Representative".to_string(),
            job_satisfaction: 3,
            marital_status: "Divorced".to_string(),
            monthly_income: 5000,
            monthly_rate: 14000,
            num_companies_worked: 2,
            over_time: "No".to_string(),
            percent_salary_hike: 15,
            performance_rating: 3,
            relationship_satisfaction: 3,
            stock_option_level: 1,
            total_working_years: 10,
            training_times_last_year: 3,
            work_life_balance: 3,
            years_at_company: 5,
            years_in_current_role: 3,
            years_since_last_promotion: 1,
            years_with_curr_manager: 3,
        }
    }
}
