//! Null-safe get/set mapper.
//!
//! Wraps the `nsm-core` primitives in an injectable component that carries a
//! [`MapperConfig`] and emits `tracing` events when chains go absent or
//! targets are assigned. Typical use is copying fields from an entity to a
//! DTO through accessor chains that may be missing at any level.
//!
//! The mapper never installs a subscriber; wire one up in the application.

pub mod config;
pub mod mapper;

// Re-exports for convenience.
pub use config::MapperConfig;
pub use mapper::NullSafeMapper;
pub use nsm_core::{Chain, MapperError, MapperResult, Resolved};

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct HireDate {
        day: u8,
        month: u8,
        year: u16,
    }

    impl HireDate {
        fn format(&self) -> String {
            format!("{:02}-{:02}-{:04}", self.day, self.month, self.year)
        }
    }

    struct Department {
        id: u64,
        name: Option<String>,
        manager: Option<Box<Employee>>,
    }

    struct Employee {
        name: Option<String>,
        age: u32,
        hire_date: Option<HireDate>,
        department: Option<Department>,
    }

    #[derive(Debug, Default, PartialEq)]
    struct EmployeeDto {
        name: Option<String>,
        age: Option<String>,
        hire_date: Option<String>,
        department: Option<String>,
        department_id: Option<u64>,
        manager_name: Option<String>,
    }

    fn entity() -> Employee {
        Employee {
            name: Some("Eugenio".into()),
            age: 32,
            hire_date: Some(HireDate {
                day: 4,
                month: 9,
                year: 2017,
            }),
            department: Some(Department {
                id: 1,
                name: Some("Developer".into()),
                manager: Some(Box::new(Employee {
                    name: Some("Marta".into()),
                    age: 45,
                    hire_date: None,
                    department: None,
                })),
            }),
        }
    }

    fn to_dto(mapper: &NullSafeMapper, entity: &Employee, dto: &mut EmployeeDto) {
        mapper.map(|v| dto.name = Some(v), || entity.name.clone());
        mapper.map1(|v| dto.age = Some(v), || Some(entity.age), |age| Some(age.to_string()));
        mapper.map1(|v| dto.hire_date = Some(v), || entity.hire_date.as_ref(), |d| Some(d.format()));
        mapper.map2(
            |v| dto.department = Some(v),
            || Some(entity),
            |e| e.department.as_ref(),
            |d| d.name.clone(),
        );
        mapper.map1(|v| dto.department_id = Some(v), || entity.department.as_ref(), |d| Some(d.id));
        mapper.map3(
            |v| dto.manager_name = Some(v),
            || entity.department.as_ref(),
            |d| d.manager.as_deref(),
            |m| m.name.as_ref(),
            |n| Some(n.to_uppercase()),
        );
    }

    // -----------------------------------------------------------------------
    // 1. Full entity maps every field
    // -----------------------------------------------------------------------
    #[test]
    fn entity_to_dto() {
        let mapper = NullSafeMapper::default();
        let entity = entity();
        let mut dto = EmployeeDto::default();
        to_dto(&mapper, &entity, &mut dto);

        assert_eq!(
            dto,
            EmployeeDto {
                name: Some("Eugenio".into()),
                age: Some("32".into()),
                hire_date: Some("04-09-2017".into()),
                department: Some("Developer".into()),
                department_id: Some(1),
                manager_name: Some("MARTA".into()),
            }
        );
    }

    // -----------------------------------------------------------------------
    // 2. Missing links leave the corresponding DTO fields as they were
    // -----------------------------------------------------------------------
    #[test]
    fn missing_links_leave_fields_untouched() {
        let mapper = NullSafeMapper::new(MapperConfig::quiet());
        let mut entity = entity();
        entity.hire_date = None;
        entity.department = None;

        let mut dto = EmployeeDto {
            department: Some("unassigned".into()),
            ..EmployeeDto::default()
        };
        to_dto(&mapper, &entity, &mut dto);

        assert_eq!(dto.name.as_deref(), Some("Eugenio"));
        assert_eq!(dto.age.as_deref(), Some("32"));
        assert_eq!(dto.hire_date, None);
        assert_eq!(dto.department.as_deref(), Some("unassigned"));
        assert_eq!(dto.department_id, None);
        assert_eq!(dto.manager_name, None);
    }

    // -----------------------------------------------------------------------
    // 3. Four-level chain through the manager's own department
    // -----------------------------------------------------------------------
    #[test]
    fn four_level_chain_stops_at_managers_missing_department() {
        let mapper = NullSafeMapper::default();
        let entity = entity();
        let later = Cell::new(0);
        let mut out = None;
        mapper.map4(
            |v: String| out = Some(v),
            || entity.department.as_ref(),
            |d| d.manager.as_deref(),
            |m| m.department.as_ref(),
            |d| {
                later.set(later.get() + 1);
                d.name.as_ref()
            },
            |n| Some(n.clone()),
        );
        assert_eq!(out, None);
        assert_eq!(later.get(), 0);
    }

    // -----------------------------------------------------------------------
    // 4. Getter forms agree with the setter forms
    // -----------------------------------------------------------------------
    #[test]
    fn getters_read_same_values() {
        let mapper = NullSafeMapper::default();
        let entity = entity();
        let manager_age = mapper.safe_chain3(
            || Some(&entity),
            |e| e.department.as_ref(),
            |d| d.manager.as_deref(),
            |m| Some(m.age),
        );
        assert_eq!(manager_age, Some(45));

        let manager_hired = mapper.safe_chain4(
            || Some(&entity),
            |e| e.department.as_ref(),
            |d| d.manager.as_deref(),
            |m| m.hire_date.as_ref(),
            |h| Some(h.format()),
        );
        assert_eq!(manager_hired, None);
    }

    // -----------------------------------------------------------------------
    // 5. Absence can be required explicitly
    // -----------------------------------------------------------------------
    #[test]
    fn required_value_reports_absent_step() {
        let entity = entity();
        let err = Chain::of(Some(&entity))
            .then(|e| e.department.as_ref())
            .then(|d| d.manager.as_deref())
            .then(|m| m.hire_date.as_ref())
            .resolve()
            .require()
            .map(|h| h.format());
        assert_eq!(err, Err(MapperError::Absent { step: 3 }));
    }
}
