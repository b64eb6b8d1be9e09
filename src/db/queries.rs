// Database queries: reads and writes against the survey table.
//
// Every database interaction goes through this module. Column names come
// from `SurveyColumn::as_str()` and the table name is validated, so no
// caller-supplied text is ever spliced into SQL.
//
// Spreadsheet imports may store numbers in text columns, so values are read
// through `text_value` which renders any SQLite type as a string.

use anyhow::Result;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};

use super::models::{NewSurveyResponse, SurveyColumn, SurveyResponse};
use super::schema::validate_table_name;

/// Insert one response and return its rowid.
pub fn insert_response(conn: &Connection, table: &str, response: &NewSurveyResponse) -> Result<i64> {
    validate_table_name(table)?;
    conn.execute(
        &format!(
            "INSERT INTO \"{table}\"
                (Escala6x1, ImpactoVidaFamiliar, ImpactoSaudeFisica, ImpactoSaudeMental, Impactos)
             VALUES (?1, ?2, ?3, ?4, ?5)"
        ),
        params![
            response.escala_6x1,
            response.impacto_vida_familiar,
            response.impacto_saude_fisica,
            response.impacto_saude_mental,
            response.impactos,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load every response in insertion order.
pub fn get_responses(conn: &Connection, table: &str) -> Result<Vec<SurveyResponse>> {
    validate_table_name(table)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT rowid, Escala6x1, ImpactoVidaFamiliar, ImpactoSaudeFisica,
                ImpactoSaudeMental, Impactos
         FROM \"{table}\"
         ORDER BY rowid"
    ))?;

    let rows = stmt.query_map([], |row| {
        Ok(SurveyResponse {
            id: row.get(0)?,
            escala_6x1: text_value(row, 1)?,
            impacto_vida_familiar: text_value(row, 2)?,
            impacto_saude_fisica: text_value(row, 3)?,
            impacto_saude_mental: text_value(row, 4)?,
            impactos: text_value(row, 5)?,
        })
    })?;

    let mut responses = Vec::new();
    for row in rows {
        responses.push(row?);
    }
    Ok(responses)
}

/// Load one column for every row, in insertion order. NULLs stay `None`.
pub fn get_column_values(
    conn: &Connection,
    table: &str,
    column: SurveyColumn,
) -> Result<Vec<Option<String>>> {
    validate_table_name(table)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT \"{}\" FROM \"{table}\" ORDER BY rowid",
        column.as_str()
    ))?;

    let rows = stmt.query_map([], |row| text_value(row, 0))?;
    let mut values = Vec::new();
    for value in rows {
        values.push(value?);
    }
    Ok(values)
}

/// Distinct non-null values of one column, in first-seen order.
pub fn get_distinct_values(
    conn: &Connection,
    table: &str,
    column: SurveyColumn,
) -> Result<Vec<String>> {
    validate_table_name(table)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT \"{col}\" FROM \"{table}\"
         WHERE \"{col}\" IS NOT NULL
         GROUP BY \"{col}\"
         ORDER BY MIN(rowid)",
        col = column.as_str()
    ))?;

    let rows = stmt.query_map([], |row| text_value(row, 0))?;
    let mut values = Vec::new();
    for value in rows {
        if let Some(v) = value? {
            values.push(v);
        }
    }
    Ok(values)
}

/// Total number of rows in the survey table.
pub fn count_responses(conn: &Connection, table: &str) -> Result<i64> {
    validate_table_name(table)?;
    let count: i64 =
        conn.query_row(&format!("SELECT COUNT(*) FROM \"{table}\""), [], |row| row.get(0))?;
    Ok(count)
}

/// Read a column as text whatever its storage class.
fn text_value(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    let value = match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;

    const TABLE: &str = "Planilha1";

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn, TABLE).unwrap();
        conn
    }

    fn response(escala: &str, familia: &str, impactos: Option<&str>) -> NewSurveyResponse {
        NewSurveyResponse {
            escala_6x1: Some(escala.to_string()),
            impacto_vida_familiar: Some(familia.to_string()),
            impactos: impactos.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_insert_and_load_roundtrip() {
        let conn = test_db();
        let id = insert_response(&conn, TABLE, &response("Sim", "Concordo", Some("cansaço")))
            .unwrap();
        assert!(id > 0);

        let rows = get_responses(&conn, TABLE).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].escala_6x1.as_deref(), Some("Sim"));
        assert_eq!(rows[0].impactos.as_deref(), Some("cansaço"));
        assert_eq!(rows[0].impacto_saude_mental, None);
    }

    #[test]
    fn test_column_values_keep_nulls_and_order() {
        let conn = test_db();
        insert_response(&conn, TABLE, &response("Sim", "Concordo", Some("a"))).unwrap();
        insert_response(&conn, TABLE, &response("Não", "Neutro", None)).unwrap();
        insert_response(&conn, TABLE, &response("Sim", "Concordo", Some("b"))).unwrap();

        let values = get_column_values(&conn, TABLE, SurveyColumn::Impactos).unwrap();
        assert_eq!(values, vec![Some("a".to_string()), None, Some("b".to_string())]);
        assert_eq!(count_responses(&conn, TABLE).unwrap(), 3);
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let conn = test_db();
        insert_response(&conn, TABLE, &response("Sim", "Neutro", None)).unwrap();
        insert_response(&conn, TABLE, &response("Sim", "Concordo", None)).unwrap();
        insert_response(&conn, TABLE, &response("Sim", "Neutro", None)).unwrap();

        let values =
            get_distinct_values(&conn, TABLE, SurveyColumn::ImpactoVidaFamiliar).unwrap();
        assert_eq!(values, vec!["Neutro".to_string(), "Concordo".to_string()]);
    }

    #[test]
    fn test_numeric_cells_read_as_text() {
        let conn = test_db();
        conn.execute("INSERT INTO Planilha1 (Escala6x1) VALUES (1)", [])
            .unwrap();
        let values = get_column_values(&conn, TABLE, SurveyColumn::Escala6x1).unwrap();
        assert_eq!(values, vec![Some("1".to_string())]);
    }

    #[test]
    fn test_empty_table() {
        let conn = test_db();
        assert!(get_responses(&conn, TABLE).unwrap().is_empty());
        assert_eq!(count_responses(&conn, TABLE).unwrap(), 0);
    }
}
