//! Sample athletes for the demo stores.

use serde_json::{json, Value};

pub fn swimmers() -> Vec<Value> {
    vec![
        json!({
            "nombre": "Mireia",
            "apellidos": "Belmonte",
            "fecha_nacimiento": {"dia": 10, "mes": 11, "año": 1990},
            "nacionalidad": "España",
            "años_de_participacion_mundial": 6,
            "numero_de_participaciones_juegos_olimpicos": 4,
        }),
        json!({
            "nombre": "Ana",
            "apellidos": "Torres",
            "fecha_nacimiento": {"dia": 3, "mes": 5, "año": 1998},
            "nacionalidad": "España",
            "años_de_participacion_mundial": 2,
            "numero_de_participaciones_juegos_olimpicos": 1,
        }),
        json!({
            "nombre": "Katie",
            "apellidos": "Ledecky",
            "fecha_nacimiento": {"dia": 17, "mes": 3, "año": 1997},
            "nacionalidad": "Estados Unidos",
            "años_de_participacion_mundial": 8,
            "numero_de_participaciones_juegos_olimpicos": 3,
        }),
    ]
}

pub fn water_polo_players() -> Vec<Value> {
    vec![
        json!({
            "nombre": "Carla",
            "apellidos": "Gil",
            "fec_nac": {"dia": 7, "mes": 7, "anio": 1995},
            "competiciones": 12,
            "nacionalidad": "Italia",
            "peso": 70,
            "posicion": "Boya",
        }),
        json!({
            "nombre": "Marta",
            "apellidos": "Bach",
            "fec_nac": {"dia": 5, "mes": 4, "anio": 1993},
            "competiciones": 18,
            "nacionalidad": "España",
            "peso": 66,
            "posicion": "Lateral",
        }),
    ]
}

pub fn rowers() -> Vec<Value> {
    vec![
        json!({
            "nombre": "Jon",
            "edad": 29,
            "campeonatosMundo": 2,
            "participacionesJJOO": 1,
            "altura": 192,
            "sexo": "M",
            "retirado": false,
        }),
        json!({
            "nombre": "Aina",
            "edad": 26,
            "campeonatosMundo": 1,
            "participacionesJJOO": 2,
            "altura": 178,
            "sexo": "F",
            "retirado": false,
        }),
    ]
}

pub fn baseball_players() -> Vec<Value> {
    vec![
        json!({
            "nombre": "Pedro",
            "apellidos": "Luna",
            "fecha_nacimiento": {"dia": 21, "mes": 9, "año": 1994},
            "equipo": "Toros",
            "posicion": "Catcher",
            "promedio_bateo": "0.310",
        }),
        json!({
            "nombre": "Luis",
            "apellidos": "Vega",
            "fecha_nacimiento": {"dia": 2, "mes": 2, "año": 1992},
            "equipo": "Halcones",
            "posicion": "Pitcher",
            "promedio_bateo": "0.275",
        }),
    ]
}

pub fn football_players() -> Vec<Value> {
    vec![
        json!({
            "nombre": "Max",
            "edad": 27,
            "fechaNacimiento": [{"dia": 9, "mes": 12, "año": 1997}],
            "equipo": "Lobos",
            "dorsal": 23,
            "posicion": "QB",
            "nacionalidad": "México",
            "apodo": "Rayo",
        }),
        json!({
            "nombre": "Diego",
            "edad": 30,
            "fechaNacimiento": [{"dia": 14, "mes": 6, "año": 1994}],
            "equipo": "Osos",
            "dorsal": 88,
            "posicion": "WR",
            "nacionalidad": "España",
            "apodo": "Manos",
        }),
    ]
}
